// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filter state value.
//!
//! A `FilterState` is never edited in place. Every transition in
//! [`Navigator`](super::Navigator) takes the current value and returns a new
//! one, so two states can be compared with `==` to tell whether filtering
//! changed. Fields are crate-private: outside callers cannot assemble a state
//! that breaks the region/metro/local consistency rules.

use serde::Serialize;
use std::collections::BTreeSet;

/// Facet dimensions that carry per-option counts.
///
/// Free-text search also narrows results but has no option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Category,
    Region,
    Metro,
    Local,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Category,
        Dimension::Region,
        Dimension::Metro,
        Dimension::Local,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Region => "region",
            Dimension::Metro => "metro",
            Dimension::Local => "local",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub(crate) search_text: String,
    pub(crate) selected_categories: BTreeSet<String>,
    pub(crate) selected_regions: BTreeSet<String>,
    pub(crate) selected_metros: BTreeSet<String>,
    pub(crate) selected_locals: BTreeSet<String>,
}

impl FilterState {
    /// Empty state: nothing selected, everything matches.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.selected_categories
    }

    pub fn selected_regions(&self) -> &BTreeSet<String> {
        &self.selected_regions
    }

    pub fn selected_metros(&self) -> &BTreeSet<String> {
        &self.selected_metros
    }

    pub fn selected_locals(&self) -> &BTreeSet<String> {
        &self.selected_locals
    }

    /// Selected values of one facet dimension.
    pub fn selected(&self, dimension: Dimension) -> &BTreeSet<String> {
        match dimension {
            Dimension::Category => &self.selected_categories,
            Dimension::Region => &self.selected_regions,
            Dimension::Metro => &self.selected_metros,
            Dimension::Local => &self.selected_locals,
        }
    }

    /// Search text as the predicate sees it: trimmed and lowercased.
    pub fn search_needle(&self) -> String {
        self.search_text.trim().to_lowercase()
    }

    pub fn has_geography(&self) -> bool {
        !(self.selected_regions.is_empty()
            && self.selected_metros.is_empty()
            && self.selected_locals.is_empty())
    }

    /// True when any dimension narrows the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty()
            || !self.selected_categories.is_empty()
            || self.has_geography()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_search_is_not_an_active_filter() {
        let state = FilterState {
            search_text: "   ".to_string(),
            ..FilterState::default()
        };
        assert!(!state.has_active_filters());
        assert_eq!(state.search_needle(), "");
    }

    #[test]
    fn search_needle_is_trimmed_and_folded() {
        let state = FilterState {
            search_text: "  Clean WATER ".to_string(),
            ..FilterState::default()
        };
        assert!(state.has_active_filters());
        assert_eq!(state.search_needle(), "clean water");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut state = FilterState::new();
        state.selected_regions.insert("West Michigan".to_string());
        let json = serde_json::to_value(&state).expect("serialize");
        assert_eq!(json["selectedRegions"][0], "West Michigan");
        assert_eq!(json["searchText"], "");
    }
}
