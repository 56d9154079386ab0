// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region, metro, and local option listings

use anyhow::Result;

use crate::cli::FilterArgs;
use crate::query::{print_options, OptionRow, Session};
use orgscope::filter::filter_locals;
use orgscope::{Dimension, FacetCache};

/// Run the regions command
pub fn run_regions(session: &Session, filters: &FilterArgs) -> Result<()> {
    let state = session.build_state(filters);
    let entries = session.optional_entries(filters)?;
    let mut cache = entries.as_deref().map(FacetCache::new);

    let rows: Vec<OptionRow> = session
        .hierarchy
        .regions()
        .into_iter()
        .map(|region| OptionRow {
            count: cache
                .as_mut()
                .map(|cache| cache.counts(&state).get(Dimension::Region, &region)),
            selected: state.selected_regions().contains(&region),
            value: region,
        })
        .collect();

    print_options(
        "region",
        &rows,
        "The hierarchy has no regions",
        session.format,
        session.compact,
    )
}

/// Run the metros command
pub fn run_metros(session: &Session, regions: &[String]) -> Result<()> {
    let filters = FilterArgs {
        regions: regions.to_vec(),
        ..FilterArgs::default()
    };
    let state = session.build_state(&filters);

    let rows: Vec<OptionRow> = session
        .navigator()
        .available_metros(&state)
        .into_iter()
        .map(|metro| OptionRow {
            value: metro,
            count: None,
            selected: false,
        })
        .collect();

    print_options(
        "metro",
        &rows,
        "No metro areas: select at least one known region with -r",
        session.format,
        session.compact,
    )
}

/// Run the locals command
pub fn run_locals(
    session: &Session,
    regions: &[String],
    metros: &[String],
    contains: Option<&str>,
) -> Result<()> {
    let filters = FilterArgs {
        regions: regions.to_vec(),
        metros: metros.to_vec(),
        ..FilterArgs::default()
    };
    let state = session.build_state(&filters);
    let available = session.navigator().available_locals(&state);

    let rows: Vec<OptionRow> = filter_locals(&available, contains.unwrap_or_default())
        .into_iter()
        .map(|local| OptionRow {
            value: local.to_string(),
            count: None,
            selected: false,
        })
        .collect();

    let hint = if !state.selected_regions().is_empty() && state.selected_metros().is_empty() {
        "No local areas: pick a metro area with -m first"
    } else {
        "No local areas match"
    };
    print_options("local", &rows, hint, session.format, session.compact)
}
