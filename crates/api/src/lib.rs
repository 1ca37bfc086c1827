// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Counting-implementation interface for the countless harness.
//!
//! This crate defines the contract between the harness and a talent
//! build-counting implementation: a factory that turns a talent
//! specification file into a table of specializations, each owning three
//! independently countable sub-trees.

mod count;
mod engine;
mod table;

pub use count::{BuildCount, BuildCounter, CountError};
pub use engine::{CountingEngine, SpecError};
pub use table::{SpecKey, SpecTable, Specialization};
