//! Remote photo gateway trait.

use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures_core::Stream;

use crate::Result;
use crate::photo::{PagedResult, RawPhotoRecord};

/// Byte stream of an image being imported.
pub type ImportStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Paginated access to the remote photo catalog.
#[async_trait]
pub trait PhotoGateway: Send + Sync {
    /// Fetch one page of the curated feed.
    async fn curated(&self, page_size: u32, page: u32) -> Result<Arc<PagedResult>>;

    /// Fetch one page of search results for `term`.
    async fn search(&self, term: &str, page_size: u32, page: u32) -> Result<Arc<PagedResult>>;

    /// Look up a photo observed in a previously fetched page.
    ///
    /// This never performs a network call; ids that were not part of any
    /// fetched page fail with [`NotFoundError`](crate::error::NotFoundError).
    fn find_by_identifier(&self, identifier: &str) -> Result<Arc<RawPhotoRecord>>;

    /// Open a byte stream for an image URL.
    async fn file_stream(&self, url: &str) -> Result<ImportStream>;
}
