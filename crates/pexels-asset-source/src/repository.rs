//! Asset proxy repository.

use async_trait::async_trait;
use tracing::instrument;

use pexels_core::{AssetProxyQuery, AssetProxyRepository, Result};

use crate::proxy::PexelsAssetProxy;
use crate::result::PexelsAssetProxyQueryResult;
use crate::source::PexelsAssetSource;

/// Entry points the media browser uses to list and resolve Pexels photos.
#[derive(Debug, Clone)]
pub struct PexelsAssetProxyRepository {
    source: PexelsAssetSource,
}

impl PexelsAssetProxyRepository {
    pub fn new(source: PexelsAssetSource) -> Self {
        Self { source }
    }
}

#[async_trait]
impl AssetProxyRepository for PexelsAssetProxyRepository {
    type Proxy = PexelsAssetProxy;
    type Result = PexelsAssetProxyQueryResult;

    /// Resolve a photo seen in an earlier page fetch.
    ///
    /// The API offers no lookup by id that is used here, so a photo has to be
    /// browsed or searched before it can be resolved.
    #[instrument(skip(self))]
    fn get_asset_proxy(&self, identifier: &str) -> Result<Self::Proxy> {
        let photo = self.source.gateway().find_by_identifier(identifier)?;
        Ok(PexelsAssetProxy::new(photo, self.source.clone()))
    }

    async fn find_all(&self) -> Result<Self::Result> {
        self.source.query().execute().await
    }

    async fn find_by_search_term(&self, search_term: &str) -> Result<Self::Result> {
        let mut query = self.source.query();
        query.set_search_term(search_term);
        query.execute().await
    }

    async fn count_all(&self) -> Result<u64> {
        self.source.query().count().await
    }
}
