// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live facet counts command

use anyhow::Result;
use colored::Colorize;
use indexmap::IndexMap;
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat};
use crate::query::{render_option, OptionRow, Session};
use orgscope::output::print_json;
use orgscope::{distinct_categories, Dimension, FacetCache, FilterState};

#[derive(Debug, Serialize)]
struct FacetsPayload<'a> {
    total: usize,
    matched: usize,
    state: &'a FilterState,
    facets: IndexMap<&'static str, Vec<OptionRow>>,
}

/// Run the facets command
pub fn run(session: &Session, filters: &FilterArgs) -> Result<()> {
    let entries = session.require_entries(filters, "facets")?;
    let state = session.build_state(filters);
    let nav = session.navigator();
    let mut cache = FacetCache::new(&entries);

    let mut facets: IndexMap<&'static str, Vec<OptionRow>> = IndexMap::new();
    for dimension in [
        Dimension::Region,
        Dimension::Metro,
        Dimension::Local,
        Dimension::Category,
    ] {
        let options = match dimension {
            Dimension::Region => session.hierarchy.regions(),
            Dimension::Metro => nav.available_metros(&state),
            Dimension::Local => nav.available_locals(&state),
            Dimension::Category => distinct_categories(&entries),
        };
        let counts = cache.counts(&state);
        let rows = options
            .into_iter()
            .map(|value| OptionRow {
                count: Some(counts.get(dimension, &value)),
                selected: state.selected(dimension).contains(&value),
                value,
            })
            .collect();
        facets.insert(dimension.as_str(), rows);
    }
    let matched = cache.counts(&state).matched;

    match session.format {
        OutputFormat::Json => {
            let payload = FacetsPayload {
                total: entries.len(),
                matched,
                state: &state,
                facets,
            };
            print_json(&payload, session.compact)?;
        }
        OutputFormat::Text => {
            println!(
                "\n{} {} of {} organizations match\n",
                "🔍".cyan(),
                matched.to_string().cyan(),
                entries.len().to_string().cyan()
            );
            for (dimension, rows) in &facets {
                println!("{}", dimension.to_uppercase().bold());
                if rows.is_empty() {
                    println!("  {}", "(no options for the current selection)".dimmed());
                }
                // Locals can run to hundreds; only list those with hits or selections.
                let hide_empty = *dimension == Dimension::Local.as_str() && rows.len() > 40;
                for row in rows {
                    if hide_empty && row.count == Some(0) && !row.selected {
                        continue;
                    }
                    println!("  {}", render_option(row));
                }
                println!();
            }
        }
    }

    Ok(())
}
