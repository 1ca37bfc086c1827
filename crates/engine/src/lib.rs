// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference talent build-counting engine.
//!
//! Parses talent specification JSON into a [`countless_api::SpecTable`] and
//! counts unconstrained builds per sub-tree with exact arbitrary-precision
//! arithmetic. Linked into the harness as the `reference` engine; a second
//! implementation of the same interface is the cross-validation target.

mod engine;
mod schema;
mod tree;

pub use engine::ReferenceEngine;
pub use schema::{NodeSpec, SpecEntry, TalentsFile, TreeSpec};
pub use tree::TalentTree;
