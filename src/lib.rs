// SPDX-License-Identifier: MIT OR Apache-2.0

//! orgscope - Cascading directory filter library
//!
//! Shared modules for the orgscope CLI tool: the region/metro/local
//! hierarchy, the filter state machine, and the per-entry match predicate.

pub mod config;
pub mod errors;
pub mod filter;
pub mod organization;
pub mod output;

pub use filter::{
    distinct_categories, filter_entries, matches, matches_geographic_filter, normalize_focus,
    Dimension, FacetCache, FacetCounts, FilterState, GeoFilter, Hierarchy, Navigator,
};
pub use organization::Organization;
