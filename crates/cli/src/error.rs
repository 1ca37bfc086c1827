// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness error taxonomy and exit codes.

use countless_api::{CountError, SpecError};
use thiserror::Error;

use crate::aggregate::TreeRole;
use crate::engines::LoadError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful run: artifact written to stdout.
    pub const SUCCESS: i32 = 0;
    /// Any load, parse, counting, or serialization failure.
    pub const ERROR: i32 = 1;
}

/// Top-level failure of a harness run.
///
/// Every variant is fatal and aborts before anything reaches stdout; a
/// partial cross-validation artifact would read as spurious discrepancies
/// downstream, so none is ever emitted.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to load counting implementation: {0}")]
    Load(#[from] LoadError),

    #[error("failed to load specification: {0}")]
    Spec(#[from] SpecError),

    #[error("counting failed for '{key}' {tree} tree: {source}")]
    Count {
        key: String,
        tree: TreeRole,
        #[source]
        source: CountError,
    },

    #[error("failed to serialize result: {0}")]
    Serialize(String),

    #[error("failed to write result: {0}")]
    Write(#[from] std::io::Error),
}
