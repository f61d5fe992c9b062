//! Asset source and repository traits.

use async_trait::async_trait;

use super::{AssetProxy, AssetProxyQueryResult};
use crate::Result;

/// A pluggable provider of remote assets.
pub trait AssetSource: Send + Sync {
    type Repository: AssetProxyRepository;

    fn identifier(&self) -> &str;

    fn label(&self) -> &str;

    fn description(&self) -> &str;

    /// Path or URI of the icon shown in the media browser.
    fn icon_uri(&self) -> Option<&str>;

    fn is_read_only(&self) -> bool;

    fn repository(&self) -> Self::Repository;
}

/// Entry points for browsing an asset source.
#[async_trait]
pub trait AssetProxyRepository: Send + Sync {
    type Proxy: AssetProxy;
    type Result: AssetProxyQueryResult<Proxy = Self::Proxy>;

    /// Resolve a single asset by its remote identifier.
    fn get_asset_proxy(&self, identifier: &str) -> Result<Self::Proxy>;

    async fn find_all(&self) -> Result<Self::Result>;

    async fn find_by_search_term(&self, search_term: &str) -> Result<Self::Result>;

    async fn count_all(&self) -> Result<u64>;
}
