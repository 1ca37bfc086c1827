// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Counting implementation registry.
//!
//! Implementations are compiled in and selected by name, so the binary that
//! produces the comparison artifact never executes external code. Adding an
//! engine means implementing [`CountingEngine`] and listing it here.

use countless_api::CountingEngine;
use countless_engine::ReferenceEngine;
use thiserror::Error;

static ENGINES: &[&dyn CountingEngine] = &[&ReferenceEngine];

/// Errors binding a counting implementation.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unknown counting engine '{name}' (available: {available})")]
    UnknownEngine { name: String, available: String },
}

/// Resolve a registered counting engine by name.
pub fn bind_implementation(name: &str) -> Result<&'static dyn CountingEngine, LoadError> {
    ENGINES
        .iter()
        .copied()
        .find(|engine| engine.name() == name)
        .ok_or_else(|| LoadError::UnknownEngine {
            name: name.to_string(),
            available: available_names().join(", "),
        })
}

/// Names of all registered engines, in registration order.
pub fn available_names() -> Vec<&'static str> {
    ENGINES.iter().map(|engine| engine.name()).collect()
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod tests;
