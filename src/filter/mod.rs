// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filter engine - hierarchy lookups, state transitions, and matching

pub mod categories;
pub mod counter;
pub mod hierarchy;
pub mod navigator;
pub mod predicate;
pub mod state;
pub mod summary;

pub use categories::{distinct_categories, normalize_focus};
pub use counter::{count_matching, FacetCache, FacetCounts};
pub use hierarchy::Hierarchy;
pub use navigator::{filter_locals, Navigator};
pub use predicate::{filter_entries, matches, matches_geographic_filter, GeoFilter};
pub use state::{Dimension, FilterState};
pub use summary::{summarize, MetroGroup, RegionGroup, SummarySort};
