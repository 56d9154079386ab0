// SPDX-License-Identifier: MIT OR Apache-2.0

//! Focus-area normalization and the distinct category index.
//!
//! The matcher and the category lister both go through [`normalize_focus`].
//! Any divergence between them shows up as a category option that silently
//! matches nothing.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::organization::Organization;

/// Normalize a raw focus value into an ordered list of strings.
///
/// Precedence:
/// 1. a JSON array is used as-is (scalar items stringified, others dropped);
/// 2. a string starting with `[` is parsed as an array literal after turning
///    single quotes into double quotes; a parse failure yields nothing;
/// 3. any other non-empty scalar becomes a one-element list;
/// 4. null, an empty string, `false`, zero, or an object yields nothing.
pub fn normalize_focus(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(text) if text.starts_with('[') => {
            match serde_json::from_str::<Vec<Value>>(&text.replace('\'', "\"")) {
                Ok(items) => items.iter().filter_map(scalar_text).collect(),
                Err(err) => {
                    tracing::warn!(focus = %text, error = %err, "unparseable focus list");
                    Vec::new()
                }
            }
        }
        Value::String(text) if text.is_empty() => Vec::new(),
        Value::String(text) => vec![text.clone()],
        // `false` and zero count as absent.
        Value::Bool(false) => Vec::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => Vec::new(),
        Value::Number(_) | Value::Bool(true) => scalar_text(raw).into_iter().collect(),
        Value::Null | Value::Object(_) => Vec::new(),
    }
}

/// Sorted set of every focus value present across `entries`.
pub fn distinct_categories<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Organization>,
{
    let categories: BTreeSet<String> = entries
        .into_iter()
        .flat_map(Organization::focus_values)
        .collect();
    categories.into_iter().collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
