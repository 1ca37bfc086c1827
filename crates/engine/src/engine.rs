// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `reference` counting engine.

use std::path::Path;

use countless_api::{CountingEngine, SpecError, SpecKey, SpecTable, Specialization};

use crate::schema::TalentsFile;
use crate::tree::TalentTree;

/// Reference implementation of the counting-engine interface.
pub struct ReferenceEngine;

impl CountingEngine for ReferenceEngine {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn load_specification(&self, path: &Path) -> Result<SpecTable, SpecError> {
        let content = std::fs::read_to_string(path)?;
        let file: TalentsFile = serde_json::from_str(&content)?;
        file.validate()?;

        let mut table = SpecTable::new();
        for entry in file.specs {
            let key = SpecKey::new(entry.class, entry.spec);
            table.insert(
                key,
                Specialization {
                    class_tree: Box::new(TalentTree::from(entry.class_tree)),
                    spec_tree: Box::new(TalentTree::from(entry.spec_tree)),
                    hero_tree: Box::new(TalentTree::from(entry.hero_tree)),
                },
            );
        }
        Ok(table)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
