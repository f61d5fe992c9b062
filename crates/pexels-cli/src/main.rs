//! pexels - browse, search and import Pexels photos from the terminal.
//!
//! This is a thin wrapper over `pexels-asset-source`, driving the same
//! query, cursor and import paths a CMS media browser would.

mod cli;
mod commands;
mod output;
mod settings;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use settings::Overrides;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let overrides = Overrides {
        api_key: cli.api_key,
        proxy: cli.proxy,
        base_url: cli.base_url,
    };

    match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &overrides).await,
        Commands::Search(args) => commands::search::run(args, &overrides).await,
        Commands::Import(args) => commands::import::run(args, &overrides).await,
        Commands::Config(cmd) => commands::config::handle(cmd, &overrides),
    }
}

/// Crates whose events the `-v` flags turn up.
const LOG_TARGETS: [&str; 4] = [
    "pexels",
    "pexels_client",
    "pexels_asset_source",
    "pexels_core",
];

/// Filter used when `RUST_LOG` is not set.
///
/// Verbosity applies to this workspace only; dependencies such as reqwest
/// and hyper stay at `warn` unless `RUST_LOG` says otherwise.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|target| format!("{}={}", target, level)))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    // Logs go to stderr so listings on stdout stay machine-readable.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_by_default() {
        assert_eq!(default_filter(0), "warn");
    }

    #[test]
    fn verbosity_targets_workspace_crates() {
        let filter = default_filter(2);

        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("pexels_client=debug"));
        assert!(filter.contains("pexels_asset_source=debug"));
        assert!(!filter.contains("reqwest"));
        assert!(default_filter(7).contains("pexels=trace"));
    }
}
