use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Minerva macroeconomic VAR pipeline.
#[derive(Parser)]
#[command(
    name = "minerva",
    version,
    about = "VAR analysis of monetary policy and unemployment"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis pipeline for every configured country.
    Analyze(AnalyzeArgs),
    /// Fetch the configured series and print the consolidated panel.
    Fetch(FetchArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file. Built-in defaults cover Brazil and
    /// the United States when the default file is absent.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override chart output directory from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Restrict the run to one configured country by name.
    #[arg(long)]
    pub country: Option<String>,
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Path to TOML configuration file. Built-in defaults cover Brazil and
    /// the United States when the default file is absent.
    #[arg(short, long, default_value = crate::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Restrict the run to one configured country by name.
    #[arg(long)]
    pub country: Option<String>,
}
