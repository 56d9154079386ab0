// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! The filter engine itself never fails; these cover loading the hierarchy
//! table and the organization snapshot.

use std::fmt;

/// Failure to load or validate a hierarchy file.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("failed to read hierarchy file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML hierarchy: {0}")]
    Toml(#[source] toml::de::Error),

    #[error("invalid JSON hierarchy: {0}")]
    Json(#[source] serde_json::Error),

    #[error("unsupported hierarchy format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    #[error("metro '{metro}' is listed under both '{first}' and '{second}'")]
    DuplicateMetro {
        metro: String,
        first: String,
        second: String,
    },
}

/// Failure to load an organization snapshot.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read organization data '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid organization JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("organization data '{path}' must be a JSON array of records")]
    NotAnArray { path: String },
}

/// Error indicating no organization snapshot was given
#[derive(Debug)]
pub struct NoDataFileError {
    pub command: String,
}

impl fmt::Display for NoDataFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No organization data given for '{}'\n\n\
             Suggestions:\n\
             - Pass a snapshot file: orgscope {} --data organizations.json\n\
             - Or set a default in .orgscoperc.toml: data = \"organizations.json\"",
            self.command, self.command
        )
    }
}

impl std::error::Error for NoDataFileError {}

/// Error indicating the organization snapshot path does not exist
#[derive(Debug)]
pub struct DataFileNotFoundError {
    pub path: String,
}

impl fmt::Display for DataFileNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Organization data not found at '{}'\n\n\
             Suggestion: export the directory as a JSON array of records first.\n\
             Example: orgscope search --data exports/organizations.json",
            self.path
        )
    }
}

impl std::error::Error for DataFileNotFoundError {}
