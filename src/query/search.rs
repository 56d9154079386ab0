// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organization search command

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat};
use crate::query::Session;
use orgscope::output::print_json;
use orgscope::{filter_entries, FilterState, Organization};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchPayload<'a> {
    total: usize,
    matched: usize,
    shown: usize,
    state: &'a FilterState,
    results: Vec<&'a Organization>,
}

/// Run the search command
pub fn run(session: &Session, filters: &FilterArgs, limit: Option<usize>) -> Result<()> {
    let entries = session.require_entries(filters, "search")?;
    let state = session.build_state(filters);
    let max_results = session.config.merge_max_results(limit);

    let matched = filter_entries(&entries, &state);
    let shown: Vec<&Organization> = matched.iter().copied().take(max_results).collect();
    tracing::debug!(
        total = entries.len(),
        matched = matched.len(),
        shown = shown.len(),
        "search complete"
    );

    match session.format {
        OutputFormat::Json => {
            let payload = SearchPayload {
                total: entries.len(),
                matched: matched.len(),
                shown: shown.len(),
                state: &state,
                results: shown,
            };
            print_json(&payload, session.compact)?;
        }
        OutputFormat::Text => {
            if matched.is_empty() {
                println!("{} No organizations found.", "✗".red());
                if state.has_active_filters() {
                    println!("  Try removing a filter or broadening the search text.");
                }
                return Ok(());
            }

            println!();
            for org in &shown {
                print_organization(org);
            }
            println!(
                "{} Showing {} of {} organizations",
                "✓".green(),
                matched.len().to_string().cyan(),
                entries.len().to_string().cyan()
            );
            if matched.len() > shown.len() {
                println!(
                    "{} Listed the first {} (use `-n` to increase)",
                    "ℹ".cyan(),
                    shown.len().to_string().cyan()
                );
            }
        }
    }

    Ok(())
}

fn print_organization(org: &Organization) {
    let name = if org.name.is_empty() {
        "(unnamed)".to_string()
    } else {
        org.name.clone()
    };
    println!("  {}", name.green().bold());

    let place: Vec<&str> = [
        org.city.as_deref(),
        org.metro_area.as_deref(),
        org.region.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !place.is_empty() {
        println!("    {}", place.join(" · ").blue());
    }

    let focus = org.focus_values();
    if !focus.is_empty() {
        println!("    {}", focus.join(", ").yellow());
    }
    if let Some(mission) = org.mission.as_deref() {
        println!("    {}", truncate(mission, 120).dimmed());
    }
    println!();
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Lac Vieux Désert", 11), "Lac Vieux D…");
    }
}
