//! Import command implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use pexels_asset_source::IPTC_COPYRIGHT_NOTICE;
use pexels_client::DEFAULT_PAGE_SIZE;
use pexels_core::{
    AssetProxy, AssetProxyQuery, AssetProxyRepository, AssetSource, ImageSize, ImportStream,
    PhotoGateway, SupportsIptcMetadata,
};

use super::open_source;
use crate::output;
use crate::settings::Overrides;

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Photo id
    pub id: String,

    /// Target file, or a directory to save under the photo's filename
    #[arg(short, long)]
    pub output: PathBuf,

    /// Search term of the page the photo appears on
    #[arg(long)]
    pub term: Option<String>,

    /// Page size of the page the photo appears on
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,

    /// Offset of the page the photo appears on
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Rendition to download (original, large, large2x, medium, small, portrait, landscape, tiny)
    #[arg(long, default_value_t = ImageSize::Original)]
    pub size: ImageSize,
}

pub async fn run(args: ImportArgs, overrides: &Overrides) -> Result<()> {
    let source = open_source(overrides)?;

    // Photos can only be resolved by id once a page containing them was fetched.
    let mut query = source.query();
    if let Some(term) = &args.term {
        query.set_search_term(term);
    }
    query.set_limit(args.limit);
    query.set_offset(args.offset);
    query.execute().await.context("Failed to fetch photos")?;

    let proxy = source
        .repository()
        .get_asset_proxy(&args.id)
        .with_context(|| format!("Photo {} is not on the selected page", args.id))?;

    let path = if args.output.is_dir() {
        args.output.join(proxy.filename())
    } else {
        args.output.clone()
    };

    eprintln!(
        "{}",
        format!("Downloading {} ({})...", proxy.label(), args.size).dimmed()
    );

    let stream = match args.size {
        ImageSize::Original => proxy.import_stream().await,
        size => source.gateway().file_stream(proxy.image_url(size)).await,
    }
    .with_context(|| format!("Failed to open the {} image", args.size))?;

    let written = save_stream(stream, &path).await?;

    debug!(bytes = written, path = %path.display(), "import finished");

    output::success(&format!("Imported {}", proxy.label()));
    println!();
    output::field("File", &path.display().to_string());
    output::field("Bytes", &written.to_string());
    output::field("Copyright", &proxy.iptc_property(IPTC_COPYRIGHT_NOTICE));

    Ok(())
}

/// Write a download to `path`, removing the file again if it fails midway.
async fn save_stream(stream: ImportStream, path: &Path) -> Result<u64> {
    let file = File::create(path)
        .await
        .with_context(|| format!("Failed to create {}", path.display()))?;

    match copy_stream(stream, file).await {
        Ok(written) => Ok(written),
        Err(err) => {
            if let Err(remove_err) = fs::remove_file(path).await {
                warn!(error = %remove_err, path = %path.display(), "failed to remove partial download");
            }
            Err(err)
        }
    }
}

async fn copy_stream(mut stream: ImportStream, mut file: File) -> Result<u64> {
    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed to download the image")?;
        file.write_all(&chunk)
            .await
            .context("Failed to write image file")?;
        written += chunk.len() as u64;
    }
    file.flush().await.context("Failed to write image file")?;
    Ok(written)
}
