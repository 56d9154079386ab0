// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live per-option counts.
//!
//! The count shown next to an option is the number of entries that pass the
//! whole current state and also carry that option's value. It is not a count
//! that ignores the other filters.

use std::collections::BTreeMap;

use super::categories::normalize_focus;
use super::predicate::{filter_entries, matches};
use super::state::{Dimension, FilterState};
use crate::organization::Organization;

/// Count entries matching `state` that carry `value` in `dimension`.
pub fn count_matching(
    entries: &[Organization],
    dimension: Dimension,
    value: &str,
    state: &FilterState,
) -> usize {
    entries
        .iter()
        .filter(|entry| matches(entry, state) && carries(entry, dimension, value))
        .count()
}

fn carries(entry: &Organization, dimension: Dimension, value: &str) -> bool {
    match dimension {
        Dimension::Category => normalize_focus(&entry.focus).iter().any(|f| f == value),
        Dimension::Region => entry.region.as_deref() == Some(value),
        Dimension::Metro => entry.metro_area.as_deref() == Some(value),
        Dimension::Local => entry.geo_locations.iter().any(|l| l == value),
    }
}

/// Counts for every value of every dimension over one filtered pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    pub matched: usize,
    pub categories: BTreeMap<String, usize>,
    pub regions: BTreeMap<String, usize>,
    pub metros: BTreeMap<String, usize>,
    pub locals: BTreeMap<String, usize>,
}

impl FacetCounts {
    pub fn compute(entries: &[Organization], state: &FilterState) -> Self {
        let mut counts = Self::default();
        for entry in filter_entries(entries, state) {
            counts.matched += 1;

            // An entry listing a value twice still counts once for it.
            let mut focus = normalize_focus(&entry.focus);
            focus.sort();
            focus.dedup();
            for category in focus {
                *counts.categories.entry(category).or_default() += 1;
            }
            if let Some(region) = &entry.region {
                *counts.regions.entry(region.clone()).or_default() += 1;
            }
            if let Some(metro) = &entry.metro_area {
                *counts.metros.entry(metro.clone()).or_default() += 1;
            }
            let mut locals: Vec<&String> = entry.geo_locations.iter().collect();
            locals.sort();
            locals.dedup();
            for local in locals {
                *counts.locals.entry(local.clone()).or_default() += 1;
            }
        }
        counts
    }

    /// Count for one option; zero when no matching entry carries it.
    pub fn get(&self, dimension: Dimension, value: &str) -> usize {
        self.tally(dimension).get(value).copied().unwrap_or(0)
    }

    pub fn tally(&self, dimension: Dimension) -> &BTreeMap<String, usize> {
        match dimension {
            Dimension::Category => &self.categories,
            Dimension::Region => &self.regions,
            Dimension::Metro => &self.metros,
            Dimension::Local => &self.locals,
        }
    }
}

/// Reuses facet counts while the filter state stays the same.
#[derive(Debug)]
pub struct FacetCache<'a> {
    entries: &'a [Organization],
    snapshot: Option<(FilterState, FacetCounts)>,
    #[cfg(test)]
    recomputed: usize,
}

impl<'a> FacetCache<'a> {
    pub fn new(entries: &'a [Organization]) -> Self {
        Self {
            entries,
            snapshot: None,
            #[cfg(test)]
            recomputed: 0,
        }
    }

    pub fn counts(&mut self, state: &FilterState) -> &FacetCounts {
        let snapshot = match self.snapshot.take() {
            Some((cached, counts)) if &cached == state => (cached, counts),
            _ => {
                tracing::debug!(entries = self.entries.len(), "recomputing facet counts");
                #[cfg(test)]
                {
                    self.recomputed += 1;
                }
                (state.clone(), FacetCounts::compute(self.entries, state))
            }
        };
        let (_, counts) = self.snapshot.insert(snapshot);
        counts
    }
}
