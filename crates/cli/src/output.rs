// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON artifact rendering.
//!
//! The artifact must be byte-comparable against the reference emitter,
//! which separates members with `", "` and keys from values with `": "`
//! and writes no trailing newline. Counts are emitted as exact numeric
//! literals; serde_json's arbitrary_precision feature carries values past
//! u64 without falling back to lossy floats.

use std::io;

use countless_api::BuildCount;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Number;

use crate::aggregate::ResultMap;
use crate::error::HarnessError;

/// Render the result mapping as the final JSON artifact.
pub fn render(map: &ResultMap) -> Result<String, HarnessError> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, counts) in map.iter() {
        entries.push((
            key,
            JsonCounts {
                class: to_number(&counts.class)?,
                spec: to_number(&counts.spec)?,
                hero: to_number(&counts.hero)?,
            },
        ));
    }

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    Artifact(&entries)
        .serialize(&mut serializer)
        .map_err(|e| HarnessError::Serialize(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| HarnessError::Serialize(e.to_string()))
}

/// Serialized form of one entry's counts. Field order is the fixed
/// counting order.
#[derive(Serialize)]
struct JsonCounts {
    class: Number,
    spec: Number,
    hero: Number,
}

struct Artifact<'a>(&'a [(&'a str, JsonCounts)]);

impl Serialize for Artifact<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, counts) in self.0 {
            map.serialize_entry(key, counts)?;
        }
        map.end()
    }
}

fn to_number(count: &BuildCount) -> Result<Number, HarnessError> {
    let digits = count.to_string();
    serde_json::from_str(&digits).map_err(|_| {
        HarnessError::Serialize(format!(
            "count {} is not representable as a JSON number",
            digits
        ))
    })
}

/// Formatter matching the reference emitter's separators.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
