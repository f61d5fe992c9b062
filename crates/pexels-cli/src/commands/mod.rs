//! Subcommand implementations.

pub mod browse;
pub mod config;
pub mod import;
pub mod search;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use pexels_asset_source::{PexelsAssetProxy, PexelsAssetProxyQueryResult, PexelsAssetSource};
use pexels_client::{DEFAULT_PAGE_SIZE, PexelsClient};
use pexels_core::{AssetProxy, AssetProxyQuery, NoImportedAssets};

use crate::output;
use crate::settings::{self, Overrides};

/// Identifier of the asset source the CLI registers.
pub const SOURCE_IDENTIFIER: &str = "pexels";

/// Paging options shared by listing commands.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Number of photos per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,

    /// Zero-based index of the first photo
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Print one JSON object per photo
    #[arg(long)]
    pub json: bool,
}

impl PageArgs {
    pub fn apply<Q: AssetProxyQuery>(&self, query: &mut Q) {
        query.set_limit(self.limit);
        query.set_offset(self.offset);
    }
}

/// Build an asset source from settings, environment and flags.
pub fn open_source(overrides: &Overrides) -> Result<PexelsAssetSource> {
    let options = settings::load()
        .context("Failed to load settings")?
        .resolve(overrides);

    let mut builder =
        PexelsClient::builder(options.access_key.clone()).user_agent(env!("PEXELS_USER_AGENT"));
    if let Some(proxy) = &options.proxy {
        builder = builder.proxy(proxy.clone());
    }
    if let Some(base_url) = &overrides.base_url {
        builder = builder.base_url(base_url.clone());
    }
    let client = builder
        .build()
        .context("Failed to configure the Pexels client")?;

    Ok(PexelsAssetSource::with_gateway(
        SOURCE_IDENTIFIER,
        options,
        Arc::new(client),
        Arc::new(NoImportedAssets),
    ))
}

/// One line of listing output.
#[derive(Debug, Serialize)]
struct PhotoSummary {
    id: String,
    label: String,
    filename: String,
    width: Option<u32>,
    height: Option<u32>,
    photographer: String,
    preview: Option<String>,
}

impl From<&PexelsAssetProxy> for PhotoSummary {
    fn from(proxy: &PexelsAssetProxy) -> Self {
        Self {
            id: proxy.identifier(),
            label: proxy.label(),
            filename: proxy.filename(),
            width: proxy.width(),
            height: proxy.height(),
            photographer: proxy.photographer().to_string(),
            preview: proxy.preview_uri().map(|uri| uri.to_string()),
        }
    }
}

/// Print a fetched page.
pub fn print_page(result: &PexelsAssetProxyQueryResult, json: bool) -> Result<()> {
    if result.iter().len() == 0 {
        eprintln!("{}", "No photos found.".dimmed());
        return Ok(());
    }

    for proxy in result {
        let summary = PhotoSummary::from(&proxy);
        if json {
            output::json(&summary)?;
        } else {
            let size = match (summary.width, summary.height) {
                (Some(width), Some(height)) => format!("{}x{}", width, height),
                _ => "?".to_string(),
            };
            println!(
                "{}  {}  {}  {}",
                summary.id.bold(),
                summary.label,
                size.dimmed(),
                summary.photographer.dimmed()
            );
        }
    }

    eprintln!();
    eprintln!(
        "{}: {} of {}",
        "Showing".dimmed(),
        result.iter().len(),
        result.total_results()
    );

    Ok(())
}
