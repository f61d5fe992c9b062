//! pexels-asset-source - Read-only Pexels asset source for a CMS media library.
//!
//! [`PexelsAssetSource`] plugs the Pexels catalog into the host's asset
//! source contract. Browsing goes through [`PexelsAssetProxyQuery`], which
//! translates the host's offset/limit window into API pages, and
//! [`PexelsAssetProxyQueryResult`], a cursor that builds a
//! [`PexelsAssetProxy`] for each photo only when it is accessed.
//!
//! # Example
//!
//! ```no_run
//! use pexels_asset_source::{PexelsAssetSource, PexelsAssetSourceOptions};
//! use pexels_core::{AssetProxy, AssetProxyQuery, AssetProxyQueryResult};
//!
//! # async fn example() -> Result<(), pexels_core::Error> {
//! let options = PexelsAssetSourceOptions {
//!     access_key: "api-key".to_string(),
//!     ..Default::default()
//! };
//! let source = PexelsAssetSource::from_options("pexels", options)?;
//!
//! let mut query = source.query();
//! query.set_search_term("lighthouse");
//! query.set_offset(40);
//!
//! let result = query.execute().await?;
//! for proxy in result.iter() {
//!     println!("{} ({})", proxy.label(), proxy.filename());
//! }
//! # Ok(())
//! # }
//! ```

mod copyright;
mod options;
mod proxy;
mod query;
mod repository;
mod result;
mod source;

pub use copyright::CopyrightNoticeTemplate;
pub use options::PexelsAssetSourceOptions;
pub use proxy::{IPTC_COPYRIGHT_NOTICE, IPTC_TITLE, MEDIA_TYPE, PexelsAssetProxy};
pub use query::{PexelsAssetProxyQuery, page_for_offset};
pub use repository::PexelsAssetProxyRepository;
pub use result::{Iter, PexelsAssetProxyQueryResult};
pub use source::{LABEL, PexelsAssetSource};
