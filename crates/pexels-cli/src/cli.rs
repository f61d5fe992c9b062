//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{browse, config, import, search};

/// Browse, search and import Pexels photos.
#[derive(Parser, Debug)]
#[command(name = "pexels")]
#[command(author, version = env!("PEXELS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Pexels API key (overrides PEXELS_API_KEY and the settings file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Outbound proxy URL (overrides PEXELS_PROXY and the settings file)
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// API base URL
    #[arg(long, global = true, hide = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List curated photos, or the default search term if one is configured
    Browse(browse::BrowseArgs),

    /// Search photos by keyword
    Search(search::SearchArgs),

    /// Download the original image of a photo
    Import(import::ImportArgs),

    /// Show or change persisted settings
    Config(config::ConfigCommand),
}
