// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

//! Shared helpers for harness process tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Create a temporary talent specification file.
pub fn write_talents(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Get path to the countless binary.
pub fn countless_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_countless"))
}
