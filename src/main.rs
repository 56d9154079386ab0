// SPDX-License-Identifier: MIT OR Apache-2.0

//! orgscope - Cascading filters for organization directories
//!
//! Browses a region > metro > local geographic hierarchy and narrows a
//! directory snapshot by geography, focus area, and free text.

mod cli;
mod query;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "warn,orgscope=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "orgscope", &mut std::io::stdout());
        return Ok(());
    }

    let session = query::Session::load(cli.hierarchy.as_deref(), cli.format, cli.compact)?;

    match cli.command {
        Commands::Regions { filters } => {
            query::geo::run_regions(&session, &filters)?;
        }
        Commands::Metros { regions } => {
            query::geo::run_metros(&session, &regions)?;
        }
        Commands::Locals {
            regions,
            metros,
            contains,
        } => {
            query::geo::run_locals(&session, &regions, &metros, contains.as_deref())?;
        }
        Commands::Categories { filters } => {
            query::categories::run(&session, &filters)?;
        }
        Commands::Search { filters, limit } => {
            query::search::run(&session, &filters, limit)?;
        }
        Commands::Facets { filters } => {
            query::facets::run(&session, &filters)?;
        }
        Commands::Summary { filters, sort } => {
            query::summary::run(&session, &filters, sort)?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
