// SPDX-License-Identifier: MIT OR Apache-2.0

//! Focus-area listing command

use anyhow::Result;

use crate::cli::FilterArgs;
use crate::query::{print_options, OptionRow, Session};
use orgscope::{distinct_categories, Dimension, FacetCounts};

/// Run the categories command
pub fn run(session: &Session, filters: &FilterArgs) -> Result<()> {
    let entries = session.require_entries(filters, "categories")?;
    let state = session.build_state(filters);
    let counts = FacetCounts::compute(&entries, &state);

    let rows: Vec<OptionRow> = distinct_categories(&entries)
        .into_iter()
        .map(|category| OptionRow {
            count: Some(counts.get(Dimension::Category, &category)),
            selected: state.selected_categories().contains(&category),
            value: category,
        })
        .collect();

    print_options(
        "category",
        &rows,
        "No focus areas found in the snapshot",
        session.format,
        session.compact,
    )
}
