// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Cross-validation harness for talent build counters
#[derive(Parser, Clone, Debug)]
#[command(
    name = "countless",
    version,
    about = "Emit unconstrained talent build counts as a JSON artifact for cross-validation"
)]
pub struct Cli {
    /// Path to the talent specification JSON file
    #[arg(value_name = "TALENTS")]
    pub talents: PathBuf,

    /// Counting implementation to bind, by registered name
    #[arg(value_name = "ENGINE")]
    pub engine: String,

    /// Report progress on stderr
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
