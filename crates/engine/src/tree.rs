// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build counting over a single talent sub-tree.

use std::collections::{HashMap, VecDeque};

use countless_api::{BuildCount, BuildCounter, CountError};

use crate::schema::TreeSpec;

/// A countable talent sub-tree.
///
/// An allocation assigns each node a rank in `0..=max_ranks`. It is legal
/// when every node above rank 0 has its `requires` prerequisite at full
/// rank, and total spent points stay within `max_points` when a cap is set.
/// Counting combines per-node rank-generating polynomials bottom-up over the
/// prerequisite forest, so the count is exact without enumerating builds.
#[derive(Clone, Debug)]
pub struct TalentTree {
    max_points: Option<u32>,
    nodes: Vec<TreeNode>,
}

#[derive(Clone, Debug)]
struct TreeNode {
    id: u32,
    max_ranks: u32,
    cost: u32,
    requires: Option<u32>,
}

impl From<TreeSpec> for TalentTree {
    fn from(spec: TreeSpec) -> Self {
        let nodes = spec
            .nodes
            .into_iter()
            .map(|node| TreeNode {
                id: node.id,
                max_ranks: node.max_ranks,
                cost: node.cost,
                requires: node.requires,
            })
            .collect();
        Self {
            max_points: spec.max_points,
            nodes,
        }
    }
}

impl BuildCounter for TalentTree {
    fn count_builds(&self) -> Result<BuildCount, CountError> {
        let limit = self.max_points.map(|cap| cap as usize);
        let n = self.nodes.len();
        if n == 0 {
            // The empty allocation is the only build.
            return Ok(BuildCount::from(1u32));
        }

        let mut index = HashMap::with_capacity(n);
        for (i, node) in self.nodes.iter().enumerate() {
            index.insert(node.id, i);
        }

        let mut parent: Vec<Option<usize>> = vec![None; n];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(req) = node.requires {
                let p = *index
                    .get(&req)
                    .ok_or(CountError::UnknownNode { node: req })?;
                parent[i] = Some(p);
            }
        }
        self.check_acyclic(&parent)?;

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut roots = Vec::new();
        for (i, p) in parent.iter().enumerate() {
            match p {
                Some(p) => children[*p].push(i),
                None => roots.push(i),
            }
        }

        // Process dependents before their prerequisite: order by depth,
        // deepest first.
        let mut depth = vec![0usize; n];
        let mut queue: VecDeque<usize> = roots.iter().copied().collect();
        while let Some(i) = queue.pop_front() {
            for &c in &children[i] {
                depth[c] = depth[i] + 1;
                queue.push_back(c);
            }
        }
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| depth[b].cmp(&depth[a]));

        let mut polys: Vec<Poly> = vec![Vec::new(); n];
        for i in order {
            let node = &self.nodes[i];
            // Full rank unlocks the dependents; any lower rank forces the
            // whole dependent subtree to zero.
            let mut unlocked = poly_one();
            for &c in &children[i] {
                unlocked = mul(&unlocked, &polys[c], limit);
            }
            let spend = node.max_ranks as usize * node.cost as usize;
            let mut poly = partial_ranks(node.max_ranks, node.cost, limit);
            add_assign(&mut poly, shift(unlocked, spend, limit));
            polys[i] = poly;
        }

        let mut total = poly_one();
        for &r in &roots {
            total = mul(&total, &polys[r], limit);
        }

        let mut count = BuildCount::from(0u32);
        for coefficient in total {
            count += coefficient;
        }
        Ok(count)
    }
}

impl TalentTree {
    /// Walk `requires` chains and reject any cycle.
    fn check_acyclic(&self, parent: &[Option<usize>]) -> Result<(), CountError> {
        const ON_CHAIN: u8 = 1;
        const CLEARED: u8 = 2;

        let mut state = vec![0u8; parent.len()];
        for start in 0..parent.len() {
            if state[start] != 0 {
                continue;
            }
            let mut chain = Vec::new();
            let mut cur = start;
            loop {
                if state[cur] == ON_CHAIN {
                    return Err(CountError::Cycle {
                        node: self.nodes[cur].id,
                    });
                }
                if state[cur] == CLEARED {
                    break;
                }
                state[cur] = ON_CHAIN;
                chain.push(cur);
                match parent[cur] {
                    Some(p) => cur = p,
                    None => break,
                }
            }
            for i in chain {
                state[i] = CLEARED;
            }
        }
        Ok(())
    }
}

/// Polynomial over build counts; the coefficient at index `k` is the number
/// of legal assignments spending exactly `k` points.
type Poly = Vec<BuildCount>;

fn poly_one() -> Poly {
    vec![BuildCount::from(1u32)]
}

/// Ranks below full: `sum of x^(r * cost) for r in 0..max_ranks`.
fn partial_ranks(max_ranks: u32, cost: u32, limit: Option<usize>) -> Poly {
    let mut out = Poly::new();
    for r in 0..max_ranks {
        let degree = r as usize * cost as usize;
        if limit.is_some_and(|l| degree > l) {
            break;
        }
        if out.len() <= degree {
            out.resize(degree + 1, BuildCount::from(0u32));
        }
        out[degree] += 1u32;
    }
    out
}

fn mul(a: &Poly, b: &Poly, limit: Option<usize>) -> Poly {
    if a.is_empty() || b.is_empty() {
        return Poly::new();
    }
    let mut len = a.len() + b.len() - 1;
    if let Some(l) = limit {
        len = len.min(l + 1);
    }
    let mut out = vec![BuildCount::from(0u32); len];
    for (i, ca) in a.iter().enumerate() {
        if i >= len {
            break;
        }
        for (j, cb) in b.iter().enumerate() {
            if i + j >= len {
                break;
            }
            out[i + j] += ca * cb;
        }
    }
    out
}

fn add_assign(a: &mut Poly, b: Poly) {
    if b.len() > a.len() {
        a.resize(b.len(), BuildCount::from(0u32));
    }
    for (i, coefficient) in b.into_iter().enumerate() {
        a[i] += coefficient;
    }
}

/// Multiply by `x^by`, truncating past the cap.
fn shift(p: Poly, by: usize, limit: Option<usize>) -> Poly {
    let mut out = vec![BuildCount::from(0u32); by];
    out.extend(p);
    if let Some(l) = limit {
        out.truncate(l + 1);
    }
    out
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
