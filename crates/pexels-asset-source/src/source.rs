//! Pexels asset source.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use pexels_client::PexelsClient;
use pexels_core::{AssetSource, ImportedAssetLookup, NoImportedAssets, PhotoGateway, Result};

use crate::copyright::CopyrightNoticeTemplate;
use crate::options::PexelsAssetSourceOptions;
use crate::query::PexelsAssetProxyQuery;
use crate::repository::PexelsAssetProxyRepository;

/// Label shown in the media browser.
pub const LABEL: &str = "Pexels";

const DEFAULT_DESCRIPTION: &str = "Free stock photos, provided by Pexels.";

/// A read-only asset source backed by the Pexels API.
///
/// Cloning is cheap; clones share the gateway and therefore its caches.
#[derive(Clone)]
pub struct PexelsAssetSource {
    inner: Arc<SourceInner>,
}

struct SourceInner {
    identifier: String,
    description: String,
    icon_path: Option<String>,
    default_search_term: String,
    copyright_notice: CopyrightNoticeTemplate,
    gateway: Arc<dyn PhotoGateway>,
    imports: Arc<dyn ImportedAssetLookup>,
}

impl PexelsAssetSource {
    /// Create a source talking to the public API.
    ///
    /// # Errors
    ///
    /// Fails if the configured proxy cannot be used. A missing access key
    /// is reported by the first query instead.
    pub fn from_options(
        identifier: impl Into<String>,
        options: PexelsAssetSourceOptions,
    ) -> Result<Self> {
        let mut builder = PexelsClient::builder(options.access_key.clone());
        if let Some(proxy) = &options.proxy {
            builder = builder.proxy(proxy.clone());
        }
        let client = builder.build()?;

        Ok(Self::with_gateway(
            identifier,
            options,
            Arc::new(client),
            Arc::new(NoImportedAssets),
        ))
    }

    /// Create a source over an existing gateway and import lookup.
    ///
    /// The access key and proxy of `options` are ignored here; they belong
    /// to the gateway.
    pub fn with_gateway(
        identifier: impl Into<String>,
        options: PexelsAssetSourceOptions,
        gateway: Arc<dyn PhotoGateway>,
        imports: Arc<dyn ImportedAssetLookup>,
    ) -> Self {
        let identifier = identifier.into();
        debug!(identifier = %identifier, "creating Pexels asset source");

        Self {
            inner: Arc::new(SourceInner {
                identifier,
                description: options
                    .description
                    .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
                icon_path: options.icon_path,
                default_search_term: options.default_search_term.trim().to_string(),
                copyright_notice: CopyrightNoticeTemplate::new(options.copyright_notice_template),
                gateway,
                imports,
            }),
        }
    }

    /// Start a new query with default paging.
    pub fn query(&self) -> PexelsAssetProxyQuery {
        PexelsAssetProxyQuery::new(self.clone())
    }

    /// Term used by queries without their own search term.
    pub fn default_search_term(&self) -> &str {
        &self.inner.default_search_term
    }

    pub fn copyright_notice_template(&self) -> &CopyrightNoticeTemplate {
        &self.inner.copyright_notice
    }

    pub fn gateway(&self) -> &Arc<dyn PhotoGateway> {
        &self.inner.gateway
    }

    pub(crate) fn imports(&self) -> &dyn ImportedAssetLookup {
        self.inner.imports.as_ref()
    }
}

impl AssetSource for PexelsAssetSource {
    type Repository = PexelsAssetProxyRepository;

    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        &self.inner.description
    }

    fn icon_uri(&self) -> Option<&str> {
        self.inner.icon_path.as_deref()
    }

    fn is_read_only(&self) -> bool {
        true
    }

    fn repository(&self) -> Self::Repository {
        PexelsAssetProxyRepository::new(self.clone())
    }
}

impl fmt::Debug for PexelsAssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsAssetSource")
            .field("identifier", &self.inner.identifier)
            .field("default_search_term", &self.inner.default_search_term)
            .finish_non_exhaustive()
    }
}
