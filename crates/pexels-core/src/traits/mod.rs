//! Host capability contract and the gateway seam.
//!
//! The media library talks to any remote provider through [`AssetSource`],
//! [`AssetProxyRepository`], [`AssetProxyQuery`], [`AssetProxyQueryResult`]
//! and [`AssetProxy`]. [`PhotoGateway`] is the seam between those and the
//! remote API.

mod gateway;
mod proxy;
mod query;
mod source;

pub use gateway::{ImportStream, PhotoGateway};
pub use proxy::{AssetProxy, ImportedAssetLookup, NoImportedAssets, SupportsIptcMetadata};
pub use query::{AssetProxyQuery, AssetProxyQueryResult};
pub use source::{AssetProxyRepository, AssetSource};
