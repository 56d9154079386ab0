// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cascading selection state machine.
//!
//! Every transition returns a fresh [`FilterState`] and then settles it:
//! - a selected metro needs its owning region selected, and no metro
//!   survives once the region set is empty;
//! - once a metro is selected, locals must be reachable from a selected metro;
//!   with regions but no metros, locals stay gated and empty;
//! - with no region and no metro selected, locals may be picked freely.
//!
//! Pruning is one-way. Re-selecting a region does not bring back the metros
//! and locals dropped when it was deselected.

use std::collections::BTreeSet;
use tracing::debug;

use super::hierarchy::Hierarchy;
use super::state::FilterState;

/// Applies selection transitions against one hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'h> {
    hierarchy: &'h Hierarchy,
}

impl<'h> Navigator<'h> {
    pub fn new(hierarchy: &'h Hierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &'h Hierarchy {
        self.hierarchy
    }

    /// Flip `region`; deselecting it drops the metros it owned and any
    /// locals those metros were the only route to.
    pub fn toggle_region(&self, state: &FilterState, region: &str) -> FilterState {
        let mut next = state.clone();
        if !next.selected_regions.remove(region) {
            next.selected_regions.insert(region.to_string());
        }
        self.settle(state, next)
    }

    /// Flip `metro`.
    ///
    /// Selecting a metro whose region is not selected also selects the
    /// region. Selecting a metro the hierarchy does not know is a no-op,
    /// since it could never satisfy the region rule. Deselecting drops the
    /// locals that only this metro reached.
    pub fn toggle_metro(&self, state: &FilterState, metro: &str) -> FilterState {
        let mut next = state.clone();
        if !next.selected_metros.remove(metro) {
            let Some(region) = self.hierarchy.region_of_metro(metro) else {
                debug!(metro, "ignoring selection of unknown metro");
                return state.clone();
            };
            next.selected_regions.insert(region.to_string());
            next.selected_metros.insert(metro.to_string());
        }
        self.settle(state, next)
    }

    /// Flip `local`. Leaf level: nothing below it to prune.
    pub fn toggle_local(&self, state: &FilterState, local: &str) -> FilterState {
        let mut next = state.clone();
        if !next.selected_locals.remove(local) {
            next.selected_locals.insert(local.to_string());
        }
        self.settle(state, next)
    }

    pub fn toggle_category(&self, state: &FilterState, category: &str) -> FilterState {
        let mut next = state.clone();
        if !next.selected_categories.remove(category) {
            next.selected_categories.insert(category.to_string());
        }
        next
    }

    pub fn set_search_text(&self, state: &FilterState, text: &str) -> FilterState {
        FilterState {
            search_text: text.to_string(),
            ..state.clone()
        }
    }

    /// Drop all region, metro, and local selections.
    pub fn clear_geography(&self, state: &FilterState) -> FilterState {
        FilterState {
            selected_regions: BTreeSet::new(),
            selected_metros: BTreeSet::new(),
            selected_locals: BTreeSet::new(),
            ..state.clone()
        }
    }

    /// Empty every dimension at once.
    pub fn clear_all(&self, _state: &FilterState) -> FilterState {
        FilterState::default()
    }

    /// Jump to a single region, replacing any geographic selection.
    pub fn focus_region(&self, state: &FilterState, region: &str) -> FilterState {
        let cleared = self.clear_geography(state);
        self.toggle_region(&cleared, region)
    }

    /// Jump to a single metro with its owning region auto-selected.
    ///
    /// An unknown metro leaves the geography cleared.
    pub fn focus_metro(&self, state: &FilterState, metro: &str) -> FilterState {
        let cleared = self.clear_geography(state);
        self.toggle_metro(&cleared, metro)
    }

    /// Metro options under the current region selection.
    pub fn available_metros(&self, state: &FilterState) -> Vec<String> {
        if state.selected_regions.is_empty() {
            return Vec::new();
        }
        self.hierarchy.metros_for_regions(&state.selected_regions)
    }

    /// Local options: metro-scoped once a metro is picked, gated while only
    /// regions are picked, and unrestricted when nothing is picked.
    pub fn available_locals(&self, state: &FilterState) -> Vec<String> {
        if !state.selected_metros.is_empty() {
            self.hierarchy.locals_for_metros(&state.selected_metros)
        } else if !state.selected_regions.is_empty() {
            Vec::new()
        } else {
            self.hierarchy.all_locals()
        }
    }

    /// Restore region/metro/local consistency after a geographic edit.
    fn settle(&self, before: &FilterState, mut next: FilterState) -> FilterState {
        let requested = (next.selected_metros.len(), next.selected_locals.len());

        if next.selected_regions.is_empty() {
            next.selected_metros.clear();
        } else {
            let hierarchy = self.hierarchy;
            let regions = &next.selected_regions;
            next.selected_metros.retain(|metro| {
                hierarchy
                    .region_of_metro(metro)
                    .is_some_and(|owner| regions.contains(owner))
            });
        }

        if !next.selected_metros.is_empty() {
            let reachable: BTreeSet<String> = self
                .hierarchy
                .locals_for_metros(&next.selected_metros)
                .into_iter()
                .collect();
            next.selected_locals.retain(|local| reachable.contains(local));
        } else if !next.selected_regions.is_empty() || !before.selected_metros.is_empty() {
            next.selected_locals.clear();
        }

        if (next.selected_metros.len(), next.selected_locals.len()) != requested {
            debug!(
                regions = next.selected_regions.len(),
                metros = next.selected_metros.len(),
                locals = next.selected_locals.len(),
                "pruned descendant selections"
            );
        }
        next
    }
}

/// Narrow a local option list to names containing `needle`, ignoring case.
pub fn filter_locals<'a>(locals: &'a [String], needle: &str) -> Vec<&'a str> {
    let needle = needle.trim().to_lowercase();
    locals
        .iter()
        .map(String::as_str)
        .filter(|local| needle.is_empty() || local.to_lowercase().contains(&needle))
        .collect()
}
