// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared JSON output helpers

use anyhow::Result;
use serde::Serialize;

/// Render `value` as pretty or single-line JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

/// Print `value` as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    println!("{}", render_json(value, compact)?);
    Ok(())
}
