//! Paginated query over the Pexels catalog.

use async_trait::async_trait;
use tracing::{debug, instrument};

use pexels_client::DEFAULT_PAGE_SIZE;
use pexels_core::{AssetProxyQuery, Result};

use crate::result::PexelsAssetProxyQueryResult;
use crate::source::PexelsAssetSource;

/// Translate a zero-based offset into a one-based API page.
///
/// Assumes every page has `limit` records: offsets `0..limit` map to page 1,
/// `limit..2*limit` to page 2 and so on. A limit of 0 is treated as 1.
///
/// ```
/// use pexels_asset_source::page_for_offset;
///
/// assert_eq!(page_for_offset(0, 20), 1);
/// assert_eq!(page_for_offset(19, 20), 1);
/// assert_eq!(page_for_offset(20, 20), 2);
/// ```
pub fn page_for_offset(offset: u32, limit: u32) -> u32 {
    let limit = u64::from(limit.max(1));
    let page = (u64::from(offset) + 1).div_ceil(limit);
    u32::try_from(page).unwrap_or(u32::MAX)
}

/// A query against a [`PexelsAssetSource`].
///
/// An empty search term falls back to the source's default term; if that is
/// empty as well the curated feed is queried.
#[derive(Debug, Clone)]
pub struct PexelsAssetProxyQuery {
    source: PexelsAssetSource,
    limit: u32,
    offset: u32,
    search_term: String,
}

impl PexelsAssetProxyQuery {
    pub fn new(source: PexelsAssetSource) -> Self {
        Self {
            source,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            search_term: String::new(),
        }
    }

    /// The source this query runs against.
    pub fn source(&self) -> &PexelsAssetSource {
        &self.source
    }

    /// The one-based API page selected by the current offset and limit.
    pub fn page(&self) -> u32 {
        page_for_offset(self.offset, self.limit)
    }

    /// The term actually sent to the API; empty selects the curated feed.
    pub fn effective_search_term(&self) -> &str {
        match self.search_term.trim() {
            "" => self.source.default_search_term(),
            term => term,
        }
    }
}

#[async_trait]
impl AssetProxyQuery for PexelsAssetProxyQuery {
    type Result = PexelsAssetProxyQueryResult;

    fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    fn offset(&self) -> u32 {
        self.offset
    }

    fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    fn limit(&self) -> u32 {
        self.limit
    }

    fn set_search_term(&mut self, search_term: &str) {
        self.search_term = search_term.to_string();
    }

    fn search_term(&self) -> &str {
        &self.search_term
    }

    #[instrument(skip(self), fields(offset = self.offset, limit = self.limit))]
    async fn execute(&self) -> Result<Self::Result> {
        let page = self.page();
        let per_page = self.limit.max(1);
        let term = self.effective_search_term();
        let gateway = self.source.gateway();

        debug!(page, term, "executing query");

        let photos = if term.is_empty() {
            gateway.curated(per_page, page).await?
        } else {
            gateway.search(term, per_page, page).await?
        };

        Ok(PexelsAssetProxyQueryResult::new(self.clone(), photos))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.execute().await?.total_results())
    }
}
