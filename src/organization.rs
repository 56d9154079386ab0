// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organization records read from a directory snapshot.
//!
//! Records come from upstream storage with inconsistent field names and
//! types. Deserialization never rejects an object: a mistyped field reads as
//! absent, so the record simply fails to match filters on that field.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::errors::DataError;
use crate::filter::normalize_focus;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    #[serde(
        default,
        alias = "mission_statement_text",
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub mission: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,

    #[serde(
        rename = "metroArea",
        alias = "metro_area",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub metro_area: Option<String>,

    #[serde(
        rename = "geoLocations",
        alias = "geo_location",
        alias = "geo_locations",
        default,
        deserialize_with = "lenient_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub geo_locations: Vec<String>,

    /// Raw focus value; read it through [`Organization::focus_values`].
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub focus: Value,

    /// Fields the filter engine does not look at (id, website, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Normalized focus areas, shared with the category index.
    pub fn focus_values(&self) -> Vec<String> {
        normalize_focus(&self.focus)
    }
}

/// Load a JSON array of organization records.
///
/// Array items that are not objects are skipped with a warning.
pub fn load_organizations(path: &Path) -> Result<Vec<Organization>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let organizations = parse_organizations(&content).map_err(|err| match err {
        DataError::NotAnArray { .. } => DataError::NotAnArray {
            path: path.display().to_string(),
        },
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        count = organizations.len(),
        "loaded organization snapshot"
    );
    Ok(organizations)
}

/// Parse organization records from JSON text.
pub fn parse_organizations(content: &str) -> Result<Vec<Organization>, DataError> {
    let value: Value = serde_json::from_str(content).map_err(DataError::Json)?;
    let Value::Array(items) = value else {
        return Err(DataError::NotAnArray {
            path: "<input>".to_string(),
        });
    };

    let mut organizations = Vec::with_capacity(items.len());
    for (index, mut item) in items.into_iter().enumerate() {
        if let Value::Object(record) = &mut item {
            fold_storage_aliases(record);
        }
        match serde_json::from_value::<Organization>(item) {
            Ok(org) => organizations.push(org),
            Err(err) => tracing::warn!(index, error = %err, "skipping malformed record"),
        }
    }
    Ok(organizations)
}

/// Storage spellings folded into their camelCase field before deserializing.
const STORAGE_ALIASES: &[(&str, &str)] = &[
    ("mission", "mission_statement_text"),
    ("metroArea", "metro_area"),
    ("geoLocations", "geo_location"),
    ("geoLocations", "geo_locations"),
];

/// Collapse camelCase/storage pairs into one key so a record carrying both
/// spellings does not trip serde's duplicate-field check. The camelCase
/// value wins unless it is null or empty.
fn fold_storage_aliases(record: &mut Map<String, Value>) {
    for (field, alias) in STORAGE_ALIASES {
        let Some(alias_value) = record.remove(*alias) else {
            continue;
        };
        if record.get(*field).map_or(true, is_blank) {
            record.insert((*field).to_string(), alias_value);
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
