// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Talent specification file schema.

use std::collections::HashSet;

use countless_api::SpecError;
use serde::Deserialize;

fn default_cost() -> u32 {
    1
}

/// Top-level talent specification document.
///
/// Entry order is significant: it becomes the insertion order of the
/// specification table and therefore the key order of the output artifact.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TalentsFile {
    pub specs: Vec<SpecEntry>,
}

/// One specialization and its three sub-trees.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpecEntry {
    pub class: String,
    pub spec: String,
    pub class_tree: TreeSpec,
    pub spec_tree: TreeSpec,
    pub hero_tree: TreeSpec,
}

/// One talent sub-tree.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeSpec {
    /// Cap on total points spent in this tree. Absent means uncapped.
    #[serde(default)]
    pub max_points: Option<u32>,

    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

/// One talent node.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub id: u32,

    /// Highest rank the node can be taken to. Must be at least 1.
    pub max_ranks: u32,

    /// Points spent per rank.
    #[serde(default = "default_cost")]
    pub cost: u32,

    /// Node that must be at full rank before this one can take points.
    #[serde(default)]
    pub requires: Option<u32>,
}

impl TalentsFile {
    /// Schema checks beyond what deserialization enforces.
    ///
    /// Rejects duplicate `(class, spec)` pairs, duplicate node ids within a
    /// tree, and zero-rank nodes. Dangling or cyclic `requires` edges are
    /// topology errors and surface at counting time instead.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mut seen = HashSet::new();
        for entry in &self.specs {
            if !seen.insert((entry.class.as_str(), entry.spec.as_str())) {
                return Err(SpecError::Schema(format!(
                    "duplicate specialization entry '{} {}'",
                    entry.class, entry.spec
                )));
            }
            for (role, tree) in [
                ("class", &entry.class_tree),
                ("spec", &entry.spec_tree),
                ("hero", &entry.hero_tree),
            ] {
                tree.validate(&format!("'{} {}' {} tree", entry.class, entry.spec, role))?;
            }
        }
        Ok(())
    }
}

impl TreeSpec {
    fn validate(&self, context: &str) -> Result<(), SpecError> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if node.max_ranks == 0 {
                return Err(SpecError::Schema(format!(
                    "{}: node {} has zero max_ranks",
                    context, node.id
                )));
            }
            if !ids.insert(node.id) {
                return Err(SpecError::Schema(format!(
                    "{}: duplicate node id {}",
                    context, node.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
