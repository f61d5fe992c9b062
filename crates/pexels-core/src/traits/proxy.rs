//! Asset proxy traits.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use super::ImportStream;
use crate::Result;

/// A read-only view of one remote asset.
#[async_trait]
pub trait AssetProxy: Send + Sync {
    /// Identifier of the asset source this proxy belongs to.
    fn asset_source_identifier(&self) -> &str;

    /// Remote identifier of the asset.
    fn identifier(&self) -> String;

    /// Human readable label.
    fn label(&self) -> String;

    /// File name used when importing.
    fn filename(&self) -> String;

    fn last_modified(&self) -> DateTime<Utc>;

    /// Size in bytes, 0 if unknown.
    fn file_size(&self) -> u64;

    fn media_type(&self) -> &str;

    fn width(&self) -> Option<u32>;

    fn height(&self) -> Option<u32>;

    fn thumbnail_uri(&self) -> Option<Url>;

    fn preview_uri(&self) -> Option<Url>;

    fn original_uri(&self) -> Option<Url>;

    /// Open the original binary for import.
    async fn import_stream(&self) -> Result<ImportStream>;

    /// Local identifier of the imported asset, if it was imported.
    fn local_asset_identifier(&self) -> Option<&str>;

    /// Returns true if the asset was already imported into local storage.
    fn is_imported(&self) -> bool {
        self.local_asset_identifier().is_some()
    }
}

/// IPTC-like metadata exposed by a proxy.
pub trait SupportsIptcMetadata {
    fn has_iptc_property(&self, name: &str) -> bool {
        self.iptc_properties().contains_key(name)
    }

    /// Returns the property value, or an empty string if unknown.
    fn iptc_property(&self, name: &str) -> String {
        self.iptc_properties().get(name).cloned().unwrap_or_default()
    }

    fn iptc_properties(&self) -> &BTreeMap<String, String>;
}

/// The host's record of which remote assets were imported.
pub trait ImportedAssetLookup: Send + Sync {
    /// Returns the local identifier of an imported remote asset.
    fn local_asset_identifier(
        &self,
        asset_source_identifier: &str,
        remote_identifier: &str,
    ) -> Option<String>;
}

/// Lookup for hosts that track no imports.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImportedAssets;

impl ImportedAssetLookup for NoImportedAssets {
    fn local_asset_identifier(&self, _: &str, _: &str) -> Option<String> {
        None
    }
}
