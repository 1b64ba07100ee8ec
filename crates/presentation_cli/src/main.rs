//! DRT launcher CLI
//!
//! Runs the launcher either as a long-lived host bridge or for one-off
//! queries and selections.

#![allow(clippy::print_stdout)]

mod host;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::LauncherService;
use clap::{Parser, Subcommand};
use domain::RenderInstruction;
use infrastructure::{AppConfig, TransitAdapter, init_logging};
use integration_transit::DrtTransitClient;
use tracing::info;

use crate::host::HostBridge;

/// DRT launcher
#[derive(Parser)]
#[command(name = "drt-launcher")]
#[command(author, version, about = "Durham Region Transit stop and departure launcher", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./drt-launcher.toml when present)
    #[arg(short, long, env = "DRT_LAUNCHER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve host events from stdin, one JSON object per line
    ///
    /// Each event yields one JSON render instruction on stdout.
    Serve,

    /// Run a single query and print the render instruction
    ///
    /// Example: drt-launcher query "departures 2045"
    Query {
        /// Text typed after the keyword (omit for favorites)
        argument: Option<String>,

        /// Keyword the query was typed with (defaults to the configured one)
        #[arg(short, long)]
        keyword: Option<String>,
    },

    /// Run a favorites action payload and print the render instruction
    ///
    /// Example: drt-launcher select "add 2045"
    Select {
        /// Action payload, e.g. "add 2045" or "remove 2045"
        payload: String,
    },
}

fn build_launcher(config: &AppConfig) -> anyhow::Result<LauncherService> {
    let client =
        DrtTransitClient::new(&config.transit).context("Failed to create transit client")?;
    let transit = Arc::new(TransitAdapter::new(client));
    Ok(LauncherService::new(transit, config.keyword.clone()))
}

fn print_instruction(instruction: &RenderInstruction) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(instruction)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.log, cli.verbose)?;

    let launcher = build_launcher(&config)?;

    match cli.command {
        Commands::Serve => {
            info!(keyword = %config.keyword, base_url = %config.transit.base_url, "Serving host events");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            HostBridge::new(launcher)
                .run(stdin, tokio::io::stdout())
                .await
                .context("Host bridge I/O failed")?;
        },

        Commands::Query { argument, keyword } => {
            let keyword = keyword.unwrap_or_else(|| launcher.keyword());
            let instruction = launcher.on_query(argument.as_deref(), &keyword).await;
            print_instruction(&instruction)?;
        },

        Commands::Select { payload } => {
            let instruction = launcher.on_item_selected(&payload).await;
            print_instruction(&instruction)?;
        },
    }

    Ok(())
}
