//! Query and query result traits.

use async_trait::async_trait;

use super::AssetProxy;
use crate::Result;

/// A paginated query against an asset source.
///
/// Pagination follows the host's model: a zero-based `offset` and a page
/// size `limit`.
#[async_trait]
pub trait AssetProxyQuery: Clone + Send + Sync {
    type Result: AssetProxyQueryResult;

    fn set_offset(&mut self, offset: u32);

    fn offset(&self) -> u32;

    fn set_limit(&mut self, limit: u32);

    fn limit(&self) -> u32;

    fn set_search_term(&mut self, search_term: &str);

    fn search_term(&self) -> &str;

    /// Run the query and return a cursor over the selected page.
    async fn execute(&self) -> Result<Self::Result>;

    /// Total number of results the remote declared for this query.
    async fn count(&self) -> Result<u64>;
}

/// A forward-only, restartable cursor over one page of results.
pub trait AssetProxyQueryResult: Send + Sync {
    type Query: AssetProxyQuery;
    type Proxy: AssetProxy;

    /// Returns a detached copy of the query that produced this result.
    fn query(&self) -> Self::Query;

    fn first(&self) -> Option<Self::Proxy>;

    /// Proxy at the cursor position, `None` once the cursor is exhausted.
    fn current(&self) -> Option<Self::Proxy>;

    fn next(&mut self);

    /// Current cursor position.
    fn key(&self) -> usize;

    /// Returns true while the cursor points at a record.
    fn valid(&self) -> bool;

    /// Reset the cursor to the first record.
    fn rewind(&mut self);

    /// Proxy at `index` within the page.
    fn get(&self, index: usize) -> Result<Self::Proxy>;

    fn contains(&self, index: usize) -> bool {
        index < self.count()
    }

    /// Number of records in this page.
    fn count(&self) -> usize;

    /// Materialize the whole page.
    fn to_array(&self) -> Result<Vec<Self::Proxy>>;

    /// Remove the record at `index`.
    fn remove(&mut self, index: usize) -> Result<()>;
}
