// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build counting contract.

use thiserror::Error;

/// Number of distinct legal point allocations for one sub-tree.
///
/// Unconstrained counts routinely exceed 2^63, so this is an
/// arbitrary-precision unsigned integer rather than a machine word.
pub type BuildCount = num_bigint::BigUint;

/// Errors surfaced by a counting implementation for a single sub-tree.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("cycle in prerequisite chain at node {node}")]
    Cycle { node: u32 },

    #[error("prerequisite references unknown node {node}")]
    UnknownNode { node: u32 },
}

/// A countable talent sub-tree.
///
/// `count_builds` is a pure function of the sub-tree: no arguments, no
/// side effects, deterministic for a fixed tree.
pub trait BuildCounter {
    /// Count the legal point allocations for this sub-tree, with no
    /// external point-budget or loadout restriction applied.
    fn count_builds(&self) -> Result<BuildCount, CountError>;
}
