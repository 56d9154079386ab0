// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query module - option listing, search, facet, and summary commands

pub mod categories;
pub mod facets;
pub mod geo;
pub mod search;
pub mod summary;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat};
use orgscope::config::{Config, ConfigOutputFormat};
use orgscope::errors::{DataFileNotFoundError, NoDataFileError};
use orgscope::organization::load_organizations;
use orgscope::output::print_json;
use orgscope::{FilterState, Hierarchy, Navigator, Organization};

/// Resolved hierarchy, config, and output settings for one invocation
pub struct Session {
    pub hierarchy: Hierarchy,
    pub config: Config,
    pub format: OutputFormat,
    pub compact: bool,
}

impl Session {
    pub fn load(hierarchy: Option<&str>, format: Option<OutputFormat>, compact: bool) -> Result<Self> {
        let config = Config::load();
        let hierarchy = match config.merge_hierarchy(hierarchy) {
            Some(path) => Hierarchy::from_path(&path)
                .with_context(|| format!("Failed to load hierarchy from {}", path.display()))?,
            None => Hierarchy::michigan().clone(),
        };
        let format = format.unwrap_or(match config.output_format() {
            Some(ConfigOutputFormat::Json) => OutputFormat::Json,
            Some(ConfigOutputFormat::Text) | None => OutputFormat::Text,
        });
        Ok(Self {
            hierarchy,
            config,
            format,
            compact,
        })
    }

    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.hierarchy)
    }

    /// Load the snapshot named by `--data` or config; error when neither is set.
    pub fn require_entries(&self, filters: &FilterArgs, command: &str) -> Result<Vec<Organization>> {
        match self.optional_entries(filters)? {
            Some(entries) => Ok(entries),
            None => Err(NoDataFileError {
                command: command.to_string(),
            }
            .into()),
        }
    }

    /// Load the snapshot if one is configured.
    pub fn optional_entries(&self, filters: &FilterArgs) -> Result<Option<Vec<Organization>>> {
        let Some(path) = self.config.merge_data(filters.data.as_deref()) else {
            return Ok(None);
        };
        if !path.exists() {
            return Err(DataFileNotFoundError {
                path: path.display().to_string(),
            }
            .into());
        }
        let entries = load_organizations(&path)
            .with_context(|| format!("Failed to load organizations from {}", path.display()))?;
        Ok(Some(entries))
    }

    /// Replay command-line selections through the navigator.
    pub fn build_state(&self, filters: &FilterArgs) -> FilterState {
        selection_state(self.navigator(), filters)
    }
}

/// Build a state by toggling each selection in hierarchy order: regions,
/// then metros, then locals, so the navigator's pruning sees a realistic
/// sequence.
pub fn selection_state(nav: Navigator<'_>, filters: &FilterArgs) -> FilterState {
    let hierarchy = nav.hierarchy();
    let mut state = FilterState::new();

    if let Some(query) = filters.query.as_deref() {
        state = nav.set_search_text(&state, query);
    }
    for focus in &filters.focus {
        if !state.selected_categories().contains(focus) {
            state = nav.toggle_category(&state, focus);
        }
    }
    for region in &filters.regions {
        if !hierarchy.contains_region(region) {
            tracing::warn!(region = %region, "region is not in the hierarchy");
        }
        if !state.selected_regions().contains(region) {
            state = nav.toggle_region(&state, region);
        }
    }
    for metro in &filters.metros {
        if !state.selected_metros().contains(metro) {
            state = nav.toggle_metro(&state, metro);
        }
        if !state.selected_metros().contains(metro) {
            tracing::warn!(metro = %metro, "metro is not in the hierarchy; ignoring");
        }
    }
    for local in &filters.locals {
        if !state.selected_locals().contains(local) {
            state = nav.toggle_local(&state, local);
        }
        if !state.selected_locals().contains(local) {
            tracing::warn!(local = %local, "local area is outside the selected metros; ignoring");
        }
    }
    state
}

/// One selectable option with its live count
#[derive(Debug, Clone, Serialize)]
pub struct OptionRow {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
struct OptionList<'a> {
    dimension: &'a str,
    options: &'a [OptionRow],
}

/// Print an option list as text or JSON.
pub fn print_options(
    dimension: &str,
    rows: &[OptionRow],
    empty_hint: &str,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            print_json(
                &OptionList {
                    dimension,
                    options: rows,
                },
                compact,
            )?;
        }
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("{} {}", "✗".red(), empty_hint);
                return Ok(());
            }
            for row in rows {
                println!("  {}", render_option(row));
            }
        }
    }
    Ok(())
}

/// `[x] Name (N)` line used by option lists and facets.
pub fn render_option(row: &OptionRow) -> String {
    let mark = if row.selected {
        "[x]".green().to_string()
    } else {
        "[ ]".dimmed().to_string()
    };
    match row.count {
        Some(count) => format!("{} {} {}", mark, row.value, format!("({count})").cyan()),
        None => format!("{} {}", mark, row.value),
    }
}
