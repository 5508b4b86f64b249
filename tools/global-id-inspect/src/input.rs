//! Turning raw input lines into identifiers.

use std::io::BufRead;

use anyhow::{Context, Result};
use global_id::{GlobalId, SchemeId};
use tracing::trace;

/// Reads one identifier per non-blank line, trimmed.
pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read identifiers from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

/// Resolves a raw input to an identifier.
///
/// Input in `CODE:value` notation keeps its scheme. Anything else is wrapped
/// with `default_scheme`, or with the unknown scheme when none is given.
pub fn resolve(raw: &str, default_scheme: Option<&SchemeId>) -> GlobalId {
    match GlobalId::parse_qualified(raw) {
        Ok(id) => id,
        Err(reason) => {
            trace!(input = raw, %reason, "treating input as a bare identifier");
            match default_scheme {
                Some(scheme) => GlobalId::new(scheme.clone(), raw),
                None => GlobalId::from_string(raw),
            }
        }
    }
}
