// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-validation aggregation: one counted entry per specialization.

use countless_api::{BuildCount, BuildCounter, SpecTable};

use crate::error::HarnessError;
use crate::output_diagnostic::{print_status, print_warning};

/// Role of a sub-tree within its specialization, in counting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeRole {
    Class,
    Spec,
    Hero,
}

impl std::fmt::Display for TreeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TreeRole::Class => "class",
            TreeRole::Spec => "spec",
            TreeRole::Hero => "hero",
        };
        f.write_str(name)
    }
}

/// Unconstrained build counts for one specialization's three sub-trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeCounts {
    pub class: BuildCount,
    pub spec: BuildCount,
    pub hero: BuildCount,
}

/// Insertion-ordered result mapping from composite key to counts.
///
/// Composite keys are built by single-space concatenation, so two distinct
/// `(class, spec)` pairs can collide. Mapping semantics apply: the later
/// entry's counts replace the earlier at the earlier's position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultMap {
    entries: Vec<(String, TreeCounts)>,
}

impl ResultMap {
    /// Insert counts under `key`, returning true when an existing entry was
    /// overwritten.
    fn insert(&mut self, key: String, counts: TreeCounts) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.0 == key) {
            entry.1 = counts;
            return true;
        }
        self.entries.push((key, counts));
        false
    }

    pub fn get(&self, key: &str) -> Option<&TreeCounts> {
        self.entries
            .iter()
            .find(|entry| entry.0 == key)
            .map(|entry| &entry.1)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeCounts)> {
        self.entries.iter().map(|entry| (entry.0.as_str(), &entry.1))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count every sub-tree of every specialization in table order.
///
/// A counting failure on any sub-tree aborts the whole run; no partial
/// mapping is returned. Composite-key collisions are not errors: the later
/// entry wins and a warning is printed on stderr.
pub fn aggregate(table: &SpecTable, verbose: bool) -> Result<ResultMap, HarnessError> {
    let mut result = ResultMap::default();
    for (key, specialization) in table.iter() {
        let composite = format!("{} {}", key.class, key.spec);
        let counts = TreeCounts {
            class: count_tree(&composite, TreeRole::Class, specialization.class_tree.as_ref())?,
            spec: count_tree(&composite, TreeRole::Spec, specialization.spec_tree.as_ref())?,
            hero: count_tree(&composite, TreeRole::Hero, specialization.hero_tree.as_ref())?,
        };
        if verbose {
            print_status(format_args!(
                "counted '{}': class={} spec={} hero={}",
                composite, counts.class, counts.spec, counts.hero
            ));
        }
        if result.insert(composite.clone(), counts) {
            print_warning(format_args!(
                "composite key '{}' collides with an earlier entry; keeping the later counts",
                composite
            ));
        }
    }
    Ok(result)
}

fn count_tree(
    key: &str,
    tree: TreeRole,
    counter: &dyn BuildCounter,
) -> Result<BuildCount, HarnessError> {
    counter.count_builds().map_err(|source| HarnessError::Count {
        key: key.to_string(),
        tree,
        source,
    })
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
