// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-entry match predicate.
//!
//! Dimensions are ANDed; selected values inside one dimension are ORed.
//! An empty dimension always passes.

use std::collections::BTreeSet;

use super::categories::normalize_focus;
use super::state::FilterState;
use crate::organization::Organization;

/// Borrowed view of the three geographic selections.
#[derive(Debug, Clone, Copy)]
pub struct GeoFilter<'a> {
    pub regions: &'a BTreeSet<String>,
    pub metros: &'a BTreeSet<String>,
    pub locals: &'a BTreeSet<String>,
}

impl<'a> From<&'a FilterState> for GeoFilter<'a> {
    fn from(state: &'a FilterState) -> Self {
        Self {
            regions: &state.selected_regions,
            metros: &state.selected_metros,
            locals: &state.selected_locals,
        }
    }
}

/// Region, metro and local checks, each enforced only when non-empty.
pub fn matches_geographic_filter(entry: &Organization, filter: GeoFilter<'_>) -> bool {
    if !filter.regions.is_empty()
        && !entry
            .region
            .as_ref()
            .is_some_and(|region| filter.regions.contains(region))
    {
        return false;
    }

    if !filter.metros.is_empty()
        && !entry
            .metro_area
            .as_ref()
            .is_some_and(|metro| filter.metros.contains(metro))
    {
        return false;
    }

    if !filter.locals.is_empty()
        && !entry
            .geo_locations
            .iter()
            .any(|local| filter.locals.contains(local))
    {
        return false;
    }

    true
}

/// Whether `entry` belongs in the result set for `state`.
pub fn matches(entry: &Organization, state: &FilterState) -> bool {
    matches_search(entry, &state.search_needle())
        && matches_categories(entry, &state.selected_categories)
        && matches_geographic_filter(entry, GeoFilter::from(state))
}

/// Entries matching `state`, in input order.
pub fn filter_entries<'a>(entries: &'a [Organization], state: &FilterState) -> Vec<&'a Organization> {
    let needle = state.search_needle();
    entries
        .iter()
        .filter(|entry| {
            matches_search(entry, &needle)
                && matches_categories(entry, &state.selected_categories)
                && matches_geographic_filter(entry, GeoFilter::from(state))
        })
        .collect()
}

/// `needle` must already be trimmed and lowercased.
pub(crate) fn matches_search(entry: &Organization, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(&entry.name)
        || entry.mission.as_deref().is_some_and(contains)
        || entry.city.as_deref().is_some_and(contains)
}

fn matches_categories(entry: &Organization, selected: &BTreeSet<String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    normalize_focus(&entry.focus)
        .iter()
        .any(|focus| selected.contains(focus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Hierarchy, Navigator};
    use serde_json::json;

    fn org(value: serde_json::Value) -> Organization {
        serde_json::from_value(value).expect("organization")
    }

    fn sample() -> Vec<Organization> {
        vec![
            org(json!({
                "name": "Lakeshore Alliance",
                "region": "West Michigan",
                "metroArea": "Grand Rapids Metro",
                "geoLocations": ["Grand Rapids"],
                "focus": ["Water"]
            })),
            org(json!({
                "name": "Clean Air Detroit",
                "mission": "Breathe easier in the city",
                "city": "Detroit",
                "region": "Southeast Michigan",
                "metroArea": "Detroit Metro",
                "geoLocations": ["Detroit"],
                "focus": ["Air Quality"]
            })),
        ]
    }

    #[test]
    fn empty_state_matches_everything() {
        let state = FilterState::new();
        for entry in sample() {
            assert!(matches(&entry, &state));
        }
        assert!(matches(&Organization::default(), &state));
    }

    #[test]
    fn region_selection_narrows_results() {
        let nav = Navigator::new(Hierarchy::michigan());
        let state = nav.toggle_region(&FilterState::new(), "West Michigan");
        let entries = sample();
        let names: Vec<&str> = filter_entries(&entries, &state)
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lakeshore Alliance"]);
    }

    #[test]
    fn search_checks_name_mission_and_city() {
        let nav = Navigator::new(Hierarchy::michigan());
        let entries = sample();

        let by_mission = nav.set_search_text(&FilterState::new(), "  BREATHE ");
        assert!(!matches(&entries[0], &by_mission));
        assert!(matches(&entries[1], &by_mission));

        let by_city = nav.set_search_text(&FilterState::new(), "detroit");
        assert_eq!(filter_entries(&entries, &by_city).len(), 1);

        let by_name = nav.set_search_text(&FilterState::new(), "lakeshore");
        assert!(matches(&entries[0], &by_name));
    }

    #[test]
    fn category_selection_is_any_of() {
        let nav = Navigator::new(Hierarchy::michigan());
        let entries = sample();
        let state = nav.toggle_category(&FilterState::new(), "Water");
        let state = nav.toggle_category(&state, "Air Quality");
        assert_eq!(filter_entries(&entries, &state).len(), 2);

        let only_climate = nav.toggle_category(&FilterState::new(), "Climate");
        assert!(filter_entries(&entries, &only_climate).is_empty());
    }

    #[test]
    fn category_match_uses_normalized_focus() {
        let nav = Navigator::new(Hierarchy::michigan());
        let state = nav.toggle_category(&FilterState::new(), "Air");
        assert!(matches(&org(json!({"focus": "['Water','Air']"})), &state));
        assert!(matches(&org(json!({"focus": "Air"})), &state));
        assert!(!matches(&org(json!({"focus": "['Air'"})), &state));
    }

    #[test]
    fn dimensions_are_anded() {
        let nav = Navigator::new(Hierarchy::michigan());
        let entries = sample();
        let state = nav.toggle_region(&FilterState::new(), "Southeast Michigan");
        let state = nav.toggle_category(&state, "Water");
        assert!(filter_entries(&entries, &state).is_empty());
    }

    #[test]
    fn geographic_filter_checks_each_non_empty_level() {
        let entries = sample();
        let entry = &entries[0];
        let empty = BTreeSet::new();
        let regions: BTreeSet<String> = ["West Michigan".to_string()].into();
        let metros: BTreeSet<String> = ["Holland Area".to_string()].into();
        let locals: BTreeSet<String> = ["Grand Rapids".to_string(), "Zeeland".to_string()].into();

        let all_empty = GeoFilter {
            regions: &empty,
            metros: &empty,
            locals: &empty,
        };
        assert!(matches_geographic_filter(entry, all_empty));

        let region_and_local = GeoFilter {
            regions: &regions,
            metros: &empty,
            locals: &locals,
        };
        assert!(matches_geographic_filter(entry, region_and_local));

        let wrong_metro = GeoFilter {
            regions: &regions,
            metros: &metros,
            locals: &empty,
        };
        assert!(!matches_geographic_filter(entry, wrong_metro));
    }

    #[test]
    fn missing_geography_fails_only_active_levels() {
        let bare = Organization::new("No Location");
        let regions: BTreeSet<String> = ["West Michigan".to_string()].into();
        let empty = BTreeSet::new();
        let filter = GeoFilter {
            regions: &regions,
            metros: &empty,
            locals: &empty,
        };
        assert!(!matches_geographic_filter(&bare, filter));

        let locals: BTreeSet<String> = ["Detroit".to_string()].into();
        let filter = GeoFilter {
            regions: &empty,
            metros: &empty,
            locals: &locals,
        };
        assert!(!matches_geographic_filter(&bare, filter));
    }
}
