//! Browse command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pexels_core::AssetProxyQuery;

use super::{PageArgs, open_source, print_page};
use crate::settings::Overrides;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: BrowseArgs, overrides: &Overrides) -> Result<()> {
    let source = open_source(overrides)?;

    let mut query = source.query();
    args.page.apply(&mut query);

    let result = query
        .execute()
        .await
        .context("Failed to fetch photos")?;

    print_page(&result, args.page.json)
}
