//! Caching HTTP gateway to the Pexels API.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::StreamExt;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tokio::sync::Mutex;
use tracing::{debug, instrument, trace};
use url::Url;

use pexels_core::error::{ConfigurationError, NotFoundError, TransferError};
use pexels_core::{
    Error, ImportStream, MemoryCache, PageCache, PagedResult, PhotoCache, PhotoGateway,
    QueryType, RawPhotoRecord, RequestSignature, Result,
};

use crate::api::{PageQuery, decode_page, normalize_proxy_url, transfer_error};

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com/v1/";

/// Timeout for list requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Timeout for downloading an original image.
pub const DEFAULT_IMPORT_TIMEOUT: Duration = Duration::from_secs(60);

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Gateway to the Pexels API with page and photo caches.
///
/// Identical page requests are answered from the page cache for the lifetime
/// of the client. Every photo of a fetched page is remembered by id, which is
/// what makes [`find_by_identifier`](PhotoGateway::find_by_identifier) work
/// without a dedicated endpoint.
///
/// Cloning is cheap and clones share the caches.
///
/// # Example
///
/// ```no_run
/// use pexels_client::PexelsClient;
/// use pexels_core::PhotoGateway;
///
/// # async fn example() -> Result<(), pexels_core::Error> {
/// let client = PexelsClient::builder("api-key").build()?;
/// let page = client.search("ocean", 20, 1).await?;
///
/// for photo in page.photos() {
///     println!("{:?}", photo.id());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PexelsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    api_key: String,
    base_url: Url,
    proxied: bool,
    timeout: Duration,
    import_timeout: Duration,
    http: reqwest::Client,
    pages: Arc<PageCache>,
    photos: Arc<PhotoCache>,
    fetch_locks: DashMap<RequestSignature, Arc<Mutex<()>>>,
}

/// Builder for [`PexelsClient`].
pub struct PexelsClientBuilder {
    api_key: String,
    proxy: Option<String>,
    base_url: String,
    timeout: Duration,
    import_timeout: Duration,
    user_agent: String,
    pages: Option<Arc<PageCache>>,
    photos: Option<Arc<PhotoCache>>,
}

impl PexelsClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            proxy: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            import_timeout: DEFAULT_IMPORT_TIMEOUT,
            user_agent: concat!("pexels-client/", env!("CARGO_PKG_VERSION")).to_string(),
            pages: None,
            photos: None,
        }
    }

    /// Route all requests through an outbound proxy. Blank means none.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn import_timeout(mut self, timeout: Duration) -> Self {
        self.import_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use an externally owned page cache.
    pub fn page_cache(mut self, cache: Arc<PageCache>) -> Self {
        self.pages = Some(cache);
        self
    }

    /// Use an externally owned photo cache.
    pub fn photo_cache(mut self, cache: Arc<PhotoCache>) -> Self {
        self.photos = Some(cache);
        self
    }

    /// Build the client.
    ///
    /// A missing API key is not an error here; it is reported by the first
    /// request so that a source can be constructed before it is configured.
    pub fn build(self) -> Result<PexelsClient> {
        let base_url = parse_base_url(&self.base_url)?;

        let mut http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout);

        let proxy = self.proxy.as_deref().and_then(normalize_proxy_url);
        if let Some(proxy_url) = &proxy {
            let proxy =
                reqwest::Proxy::all(proxy_url).map_err(|e| ConfigurationError::InvalidProxy {
                    value: proxy_url.clone(),
                    reason: e.to_string(),
                })?;
            http = http.proxy(proxy);
        }

        let http = http.build().map_err(|e| ConfigurationError::HttpClient {
            message: e.to_string(),
        })?;

        let pages: Arc<PageCache> = match self.pages {
            Some(cache) => cache,
            None => Arc::new(MemoryCache::<RequestSignature, Arc<PagedResult>>::new()),
        };
        let photos: Arc<PhotoCache> = match self.photos {
            Some(cache) => cache,
            None => Arc::new(MemoryCache::<String, Arc<RawPhotoRecord>>::new()),
        };

        Ok(PexelsClient {
            inner: Arc::new(ClientInner {
                api_key: self.api_key,
                base_url,
                proxied: proxy.is_some(),
                timeout: self.timeout,
                import_timeout: self.import_timeout,
                http,
                pages,
                photos,
                fetch_locks: DashMap::new(),
            }),
        })
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    // Url::join drops the last path segment unless the base ends in a slash.
    let normalized = if value.ends_with('/') {
        value.to_string()
    } else {
        format!("{}/", value)
    };

    Url::parse(&normalized).map_err(|e| {
        Error::from(ConfigurationError::InvalidBaseUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })
    })
}

impl PexelsClient {
    /// Start building a client for the given API key.
    pub fn builder(api_key: impl Into<String>) -> PexelsClientBuilder {
        PexelsClientBuilder::new(api_key)
    }

    /// Create a client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the page cache.
    pub fn page_cache(&self) -> &Arc<PageCache> {
        &self.inner.pages
    }

    /// Returns the photo cache.
    pub fn photo_cache(&self) -> &Arc<PhotoCache> {
        &self.inner.photos
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let api_key = self.inner.api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigurationError::MissingApiKey.into());
        }

        let mut value =
            HeaderValue::from_str(api_key).map_err(|_| ConfigurationError::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(value)
    }

    fn endpoint_url(&self, query_type: QueryType) -> Result<Url> {
        self.inner
            .base_url
            .join(query_type.endpoint())
            .map_err(|e| {
                Error::from(ConfigurationError::InvalidBaseUrl {
                    value: self.inner.base_url.to_string(),
                    reason: e.to_string(),
                })
            })
    }

    fn map_transfer(&self, err: reqwest::Error, timeout: Duration) -> Error {
        transfer_error(err, timeout, self.inner.proxied).into()
    }

    /// Fetch a page, answering from the page cache when possible.
    #[instrument(skip(self, signature), fields(%signature))]
    async fn execute_query(&self, signature: RequestSignature) -> Result<Arc<PagedResult>> {
        if let Some(page) = self.inner.pages.get(&signature) {
            trace!("page cache hit");
            return Ok(page);
        }

        // Misses on the same signature are serialized so they fetch once;
        // different signatures fetch in parallel.
        let lock = self.fetch_lock(&signature);
        let _guard = lock.lock().await;
        if let Some(page) = self.inner.pages.get(&signature) {
            trace!("page cache hit after waiting for fetch");
            return Ok(page);
        }

        let authorization = self.authorization()?;
        let url = self.endpoint_url(signature.query_type)?;
        let query = PageQuery {
            per_page: signature.per_page,
            page: signature.page,
            query: Some(signature.term.as_str()).filter(|term| !term.is_empty()),
        };

        debug!(%url, "fetching page");

        let response = self
            .inner
            .http
            .get(url.clone())
            .query(&query)
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| self.map_transfer(e, self.inner.timeout))?;

        let status = response.status();
        trace!(status = %status, "page response");
        if !status.is_success() {
            return Err(TransferError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transfer(e, self.inner.timeout))?;
        let page = Arc::new(decode_page(&body)?);

        self.remember_photos(&page);
        self.inner.pages.set(signature.clone(), Arc::clone(&page));
        self.inner.fetch_locks.remove(&signature);

        debug!(
            photos = page.len(),
            total_results = page.total_results(),
            "page fetched"
        );
        Ok(page)
    }

    fn fetch_lock(&self, signature: &RequestSignature) -> Arc<Mutex<()>> {
        Arc::clone(&self.inner.fetch_locks.entry(signature.clone()).or_default())
    }

    /// Cache every photo of a page by id.
    fn remember_photos(&self, page: &PagedResult) {
        for photo in page.photos() {
            if let Some(id) = photo.id() {
                self.inner.photos.set(id, Arc::clone(photo));
            }
        }
    }
}

#[async_trait]
impl PhotoGateway for PexelsClient {
    async fn curated(&self, page_size: u32, page: u32) -> Result<Arc<PagedResult>> {
        self.execute_query(RequestSignature::curated(page_size, page))
            .await
    }

    async fn search(&self, term: &str, page_size: u32, page: u32) -> Result<Arc<PagedResult>> {
        self.execute_query(RequestSignature::search(term, page_size, page))
            .await
    }

    #[instrument(skip(self))]
    fn find_by_identifier(&self, identifier: &str) -> Result<Arc<RawPhotoRecord>> {
        self.inner
            .photos
            .get(&identifier.to_string())
            .ok_or_else(|| {
                NotFoundError::Photo {
                    id: identifier.to_string(),
                }
                .into()
            })
    }

    #[instrument(skip(self))]
    async fn file_stream(&self, url: &str) -> Result<ImportStream> {
        let parsed = Url::parse(url).map_err(|e| TransferError::Http {
            message: format!("invalid image URL '{}': {}", url, e),
        })?;

        debug!("opening import stream");

        let import_timeout = self.inner.import_timeout;
        let response = self
            .inner
            .http
            .get(parsed)
            .timeout(import_timeout)
            .send()
            .await
            .map_err(|e| self.map_transfer(e, import_timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        let proxied = self.inner.proxied;
        let stream = response.bytes_stream().map(move |chunk| {
            chunk.map_err(|e| Error::from(transfer_error(e, import_timeout, proxied)))
        });

        Ok(Box::pin(stream))
    }
}

// Hide the API key in Debug output
impl fmt::Debug for PexelsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("proxied", &self.inner.proxied)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}
