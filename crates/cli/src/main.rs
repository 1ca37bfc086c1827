// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-validation harness binary entry point.

use clap::Parser;

use countless::cli::Cli;
use countless::error::exit_codes;
use countless::output_diagnostic::print_error;
use countless::runtime;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = runtime::run(&cli) {
        print_error(e);
        std::process::exit(exit_codes::ERROR);
    }
}
