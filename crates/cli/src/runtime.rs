// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One harness run: bind, load, aggregate, emit.

use std::io::{self, Write};

use crate::aggregate::aggregate;
use crate::cli::Cli;
use crate::engines::bind_implementation;
use crate::error::HarnessError;
use crate::output::render;
use crate::output_diagnostic::print_status;

/// Execute a full run, writing the artifact to stdout.
pub fn run(cli: &Cli) -> Result<(), HarnessError> {
    let mut stdout = io::stdout().lock();
    run_with_writer(cli, &mut stdout)
}

/// Execute a full run against an arbitrary output sink.
///
/// The run is strictly sequential: bind the implementation, load the
/// specification, count every sub-tree, render, then write once. Nothing
/// reaches the sink until the whole artifact has been rendered, so a
/// failure never leaves partial JSON behind.
pub fn run_with_writer<W: Write>(cli: &Cli, out: &mut W) -> Result<(), HarnessError> {
    let engine = bind_implementation(&cli.engine)?;
    if cli.verbose {
        print_status(format_args!("bound counting engine '{}'", engine.name()));
    }

    let table = engine.load_specification(&cli.talents)?;
    if cli.verbose {
        print_status(format_args!(
            "loaded {} specializations from {}",
            table.len(),
            cli.talents.display()
        ));
    }

    let result = aggregate(&table, cli.verbose)?;
    let artifact = render(&result)?;

    out.write_all(artifact.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
