// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Counting engine contract: the factory side of the interface.

use std::path::Path;

use thiserror::Error;

use crate::table::SpecTable;

/// Errors that can occur when loading a talent specification file.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read specification file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid specification: {0}")]
    Schema(String),
}

/// A build-counting implementation.
///
/// An engine owns the talent specification schema: the harness hands it a
/// file path and receives a table of specializations without interpreting
/// the file itself. Engines are registered statically and selected by name
/// at invocation time, so a second implementation can be swapped in without
/// touching the harness.
pub trait CountingEngine: Send + Sync {
    /// Registry name of this engine.
    fn name(&self) -> &'static str;

    /// Parse the specification file at `path` into a table of
    /// specializations backed by this engine's counters.
    fn load_specification(&self, path: &Path) -> Result<SpecTable, SpecError>;
}
