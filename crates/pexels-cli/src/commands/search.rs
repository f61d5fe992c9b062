//! Search command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pexels_core::AssetProxyQuery;

use super::{PageArgs, open_source, print_page};
use crate::settings::Overrides;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term
    pub term: String,

    #[command(flatten)]
    pub page: PageArgs,
}

pub async fn run(args: SearchArgs, overrides: &Overrides) -> Result<()> {
    let source = open_source(overrides)?;

    let mut query = source.query();
    query.set_search_term(&args.term);
    args.page.apply(&mut query);

    let result = query
        .execute()
        .await
        .with_context(|| format!("Failed to search for '{}'", args.term))?;

    print_page(&result, args.page.json)
}
