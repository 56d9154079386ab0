// SPDX-License-Identifier: MIT OR Apache-2.0

//! Region/metro summary command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat, SummarySortArg};
use crate::query::Session;
use orgscope::filter::{summarize, SummarySort};
use orgscope::filter_entries;
use orgscope::output::print_json;

#[derive(Debug, Serialize)]
struct MetroRow<'a> {
    name: &'a str,
    count: usize,
    organizations: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct RegionRow<'a> {
    name: &'a str,
    total: usize,
    metros: Vec<MetroRow<'a>>,
}

impl From<SummarySortArg> for SummarySort {
    fn from(arg: SummarySortArg) -> Self {
        match arg {
            SummarySortArg::Region => SummarySort::Region,
            SummarySortArg::Count => SummarySort::Count,
            SummarySortArg::Name => SummarySort::Name,
        }
    }
}

/// Run the summary command
pub fn run(session: &Session, filters: &FilterArgs, sort: SummarySortArg) -> Result<()> {
    let entries = session.require_entries(filters, "summary")?;
    let state = session.build_state(filters);
    let matched = filter_entries(&entries, &state);
    let groups = summarize(matched.iter().copied(), sort.into());

    let rows: Vec<RegionRow<'_>> = groups
        .iter()
        .map(|group| RegionRow {
            name: &group.name,
            total: group.total,
            metros: group
                .metros
                .iter()
                .map(|metro| MetroRow {
                    name: &metro.name,
                    count: metro.organizations.len(),
                    organizations: metro
                        .organizations
                        .iter()
                        .map(|org| org.name.as_str())
                        .collect(),
                })
                .collect(),
        })
        .collect();

    match session.format {
        OutputFormat::Json => print_json(&rows, session.compact)?,
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("{} No organizations found.", "✗".red());
                return Ok(());
            }
            println!();
            for region in &rows {
                println!(
                    "{} {}",
                    region.name.bold(),
                    format!("{} organizations", region.total).cyan()
                );
                for metro in &region.metros {
                    println!("  {} {}", metro.name.blue(), format!("({})", metro.count).dimmed());
                }
                println!();
            }
        }
    }

    Ok(())
}
