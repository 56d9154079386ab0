// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// orgscope - Cascading filters for organization directories
///
/// Narrow a directory snapshot by region, metro area, local area, focus
/// area, and free text, with live counts for every option.
#[derive(Parser, Debug)]
#[command(name = "orgscope")]
#[command(
    author,
    version,
    about,
    long_about = None,
    override_usage = "orgscope [OPTIONS] <COMMAND>",
    after_help = "Quickstart:\n  orgscope regions\n  orgscope search -d orgs.json -r \"West Michigan\" -f Water\n  orgscope facets -d orgs.json -m \"Detroit Metro\""
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Hierarchy file (TOML or JSON) replacing the built-in Michigan table
    #[arg(long, global = true, value_name = "FILE")]
    pub hierarchy: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Region ordering for the summary command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SummarySortArg {
    /// First-seen order
    #[default]
    Region,
    /// Most organizations first
    Count,
    /// Alphabetical
    Name,
}

/// Selections shared by every command that filters a snapshot
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Organization snapshot (JSON array); falls back to `data` in config
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data: Option<String>,

    /// Free-text search over name, mission, and city
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Focus area to include (repeatable, any-of)
    #[arg(short = 'f', long = "focus", value_name = "FOCUS")]
    pub focus: Vec<String>,

    /// Region to include (repeatable, any-of)
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub regions: Vec<String>,

    /// Metro area to include; selects its region too (repeatable)
    #[arg(short = 'm', long = "metro", value_name = "METRO")]
    pub metros: Vec<String>,

    /// Local area to include (repeatable)
    #[arg(short = 'l', long = "local", value_name = "LOCAL")]
    pub locals: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List regions, with live counts when a snapshot is given
    #[command(visible_aliases = ["rg"])]
    Regions {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List metro areas offered for the selected regions
    #[command(visible_aliases = ["mt"])]
    Metros {
        /// Selected region (repeatable)
        #[arg(short = 'r', long = "region", value_name = "REGION")]
        regions: Vec<String>,
    },

    /// List local areas offered for the current selection
    #[command(
        visible_aliases = ["lc"],
        after_help = "With no region or metro, every local area is listed.\nWith regions but no metro, nothing is listed until a metro is picked."
    )]
    Locals {
        /// Selected region (repeatable)
        #[arg(short = 'r', long = "region", value_name = "REGION")]
        regions: Vec<String>,

        /// Selected metro area (repeatable)
        #[arg(short = 'm', long = "metro", value_name = "METRO")]
        metros: Vec<String>,

        /// Only list local areas containing this text
        #[arg(short = 'c', long)]
        contains: Option<String>,
    },

    /// List distinct focus areas in a snapshot
    #[command(visible_aliases = ["cat"])]
    Categories {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List organizations matching the selection
    #[command(
        visible_aliases = ["s", "find"],
        after_help = "Examples:\n  orgscope s -d orgs.json -q river\n  orgscope search -d orgs.json -m \"Grand Rapids Metro\" -l Walker"
    )]
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of organizations to list
        #[arg(short = 'n', long = "limit", visible_alias = "max-results")]
        limit: Option<usize>,
    },

    /// Show live counts for every option of every dimension
    #[command(visible_aliases = ["fc"])]
    Facets {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Group matching organizations by region and metro
    #[command(visible_aliases = ["sum"])]
    Summary {
        #[command(flatten)]
        filters: FilterArgs,

        /// Region ordering
        #[arg(long, value_enum, default_value_t = SummarySortArg::Region)]
        sort: SummarySortArg,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
