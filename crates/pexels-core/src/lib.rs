//! pexels-core - Core types and traits for the Pexels media asset source.

pub mod cache;
pub mod error;
pub mod photo;
pub mod traits;

pub use cache::{Cache, MemoryCache, PageCache, PhotoCache};
pub use error::Error;
pub use photo::{ImageSize, PagedResult, QueryType, RawPhotoRecord, RequestSignature};
pub use traits::{
    AssetProxy, AssetProxyQuery, AssetProxyQueryResult, AssetProxyRepository, AssetSource,
    ImportStream, ImportedAssetLookup, NoImportedAssets, PhotoGateway, SupportsIptcMetadata,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
