// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region -> metro grouping of a result set.

use indexmap::IndexMap;

use crate::organization::Organization;

pub const UNSPECIFIED_REGION: &str = "Unspecified";
pub const NO_METRO: &str = "No Metro";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummarySort {
    /// Order in which regions first appear in the results.
    #[default]
    Region,
    /// Most organizations first.
    Count,
    /// Region name ascending.
    Name,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetroGroup<'a> {
    pub name: String,
    pub organizations: Vec<&'a Organization>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup<'a> {
    pub name: String,
    pub total: usize,
    pub metros: Vec<MetroGroup<'a>>,
}

/// Group entries by region, then metro, keeping first-seen order inside each level.
pub fn summarize<'a, I>(entries: I, sort: SummarySort) -> Vec<RegionGroup<'a>>
where
    I: IntoIterator<Item = &'a Organization>,
{
    let mut grouped: IndexMap<&str, IndexMap<&str, Vec<&'a Organization>>> = IndexMap::new();
    for entry in entries {
        let region = entry.region.as_deref().unwrap_or(UNSPECIFIED_REGION);
        let metro = entry.metro_area.as_deref().unwrap_or(NO_METRO);
        grouped
            .entry(region)
            .or_default()
            .entry(metro)
            .or_default()
            .push(entry);
    }

    let mut regions: Vec<RegionGroup<'a>> = grouped
        .into_iter()
        .map(|(region, metros)| {
            let metros: Vec<MetroGroup<'a>> = metros
                .into_iter()
                .map(|(metro, organizations)| MetroGroup {
                    name: metro.to_string(),
                    organizations,
                })
                .collect();
            RegionGroup {
                name: region.to_string(),
                total: metros.iter().map(|m| m.organizations.len()).sum(),
                metros,
            }
        })
        .collect();

    // Stable sorts keep first-seen order among ties.
    match sort {
        SummarySort::Region => {}
        SummarySort::Count => regions.sort_by(|a, b| b.total.cmp(&a.total)),
        SummarySort::Name => regions.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    regions
}
