//! Asset proxy over a single Pexels photo.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use pexels_core::{
    AssetProxy, AssetSource, ImageSize, ImportStream, RawPhotoRecord, Result,
    SupportsIptcMetadata,
};

use crate::source::PexelsAssetSource;

/// Media type of every Pexels download.
pub const MEDIA_TYPE: &str = "image/jpeg";

/// IPTC property holding the label.
pub const IPTC_TITLE: &str = "Title";

/// IPTC property holding the rendered copyright notice.
pub const IPTC_COPYRIGHT_NOTICE: &str = "CopyrightNotice";

/// Read-only view of one photo record.
///
/// The record is shared with the gateway caches, not copied. Import status
/// is looked up once when the proxy is created.
#[derive(Debug, Clone)]
pub struct PexelsAssetProxy {
    photo: Arc<RawPhotoRecord>,
    source: PexelsAssetSource,
    local_asset_identifier: Option<String>,
    iptc_properties: OnceLock<BTreeMap<String, String>>,
}

impl PexelsAssetProxy {
    pub fn new(photo: Arc<RawPhotoRecord>, source: PexelsAssetSource) -> Self {
        let local_asset_identifier = photo
            .id()
            .and_then(|id| source.imports().local_asset_identifier(source.identifier(), &id));

        Self {
            photo,
            source,
            local_asset_identifier,
            iptc_properties: OnceLock::new(),
        }
    }

    /// The underlying photo record.
    pub fn photo(&self) -> &RawPhotoRecord {
        &self.photo
    }

    /// URL of a named size, or an empty string if the photo has none.
    pub fn image_url(&self, size: ImageSize) -> &str {
        self.photo.image_url(size).unwrap_or("")
    }

    /// Name of the photographer, empty if unknown.
    pub fn photographer(&self) -> &str {
        self.photo.str_field("photographer").unwrap_or("")
    }

    fn image_uri(&self, size: ImageSize) -> Option<Url> {
        Url::parse(self.image_url(size)).ok()
    }

    /// Slug of the photo page URL with the id removed.
    ///
    /// `https://www.pexels.com/photo/green-leaves-1072179/` yields
    /// `green-leaves`. Empty if there is no URL or nothing is left.
    fn slug(&self) -> String {
        let Some(url) = self.photo.str_field("url").filter(|url| !url.is_empty()) else {
            return String::new();
        };

        let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        let identifier = self.identifier();
        let segment = if identifier.is_empty() {
            segment.to_string()
        } else {
            segment.replace(&identifier, "")
        };

        segment
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[async_trait]
impl AssetProxy for PexelsAssetProxy {
    fn asset_source_identifier(&self) -> &str {
        self.source.identifier()
    }

    fn identifier(&self) -> String {
        self.photo.id().unwrap_or_default()
    }

    fn label(&self) -> String {
        match self.slug() {
            slug if slug.is_empty() => self.identifier(),
            slug => slug.replace('-', " "),
        }
    }

    fn filename(&self) -> String {
        match self.slug() {
            slug if slug.is_empty() => format!("{}.jpg", self.identifier()),
            slug => format!("{}.jpg", slug),
        }
    }

    // The API has no modification timestamps.
    fn last_modified(&self) -> DateTime<Utc> {
        Utc::now()
    }

    // The API does not report file sizes.
    fn file_size(&self) -> u64 {
        0
    }

    fn media_type(&self) -> &str {
        MEDIA_TYPE
    }

    fn width(&self) -> Option<u32> {
        self.photo.u32_field("width")
    }

    fn height(&self) -> Option<u32> {
        self.photo.u32_field("height")
    }

    fn thumbnail_uri(&self) -> Option<Url> {
        self.image_uri(ImageSize::Tiny)
    }

    fn preview_uri(&self) -> Option<Url> {
        self.image_uri(ImageSize::Large)
    }

    fn original_uri(&self) -> Option<Url> {
        self.image_uri(ImageSize::Original)
    }

    async fn import_stream(&self) -> Result<ImportStream> {
        self.source
            .gateway()
            .file_stream(self.image_url(ImageSize::Original))
            .await
    }

    fn local_asset_identifier(&self) -> Option<&str> {
        self.local_asset_identifier.as_deref()
    }
}

impl SupportsIptcMetadata for PexelsAssetProxy {
    fn iptc_properties(&self) -> &BTreeMap<String, String> {
        self.iptc_properties.get_or_init(|| {
            BTreeMap::from([
                (IPTC_TITLE.to_string(), self.label()),
                (
                    IPTC_COPYRIGHT_NOTICE.to_string(),
                    self.source
                        .copyright_notice_template()
                        .render(self.photographer()),
                ),
            ])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PexelsAssetSourceOptions;
    use pexels_core::ImportedAssetLookup;
    use serde_json::{Value, json};

    fn source() -> PexelsAssetSource {
        let options = PexelsAssetSourceOptions {
            copyright_notice_template: "Photo by {user.name} on Pexels".to_string(),
            ..Default::default()
        };
        PexelsAssetSource::from_options("pexels", options).unwrap()
    }

    fn proxy(value: Value) -> PexelsAssetProxy {
        PexelsAssetProxy::new(
            Arc::new(RawPhotoRecord::from_value(value).unwrap()),
            source(),
        )
    }

    #[test]
    fn label_and_filename_from_trailing_id() {
        let proxy = proxy(json!({
            "id": 1072179,
            "url": "https://www.pexels.com/photo/green-leaves-1072179/"
        }));

        assert_eq!(proxy.identifier(), "1072179");
        assert_eq!(proxy.label(), "green leaves");
        assert_eq!(proxy.filename(), "green-leaves.jpg");
    }

    #[test]
    fn label_and_filename_from_leading_id() {
        let proxy = proxy(json!({
            "id": 1234,
            "url": "https://www.pexels.com/photo/1234-slug-words"
        }));

        assert_eq!(proxy.label(), "slug words");
        assert_eq!(proxy.filename(), "slug-words.jpg");
    }

    #[test]
    fn id_in_the_middle_leaves_no_double_dash() {
        let proxy = proxy(json!({
            "id": 1234,
            "url": "https://www.pexels.com/photo/red-1234-car/"
        }));

        assert_eq!(proxy.filename(), "red-car.jpg");
    }

    #[test]
    fn missing_url_falls_back_to_id() {
        let empty = proxy(json!({"id": 77, "url": ""}));
        let absent = proxy(json!({"id": 78}));

        assert_eq!(empty.label(), "77");
        assert_eq!(empty.filename(), "77.jpg");
        assert_eq!(absent.label(), "78");
        assert_eq!(absent.filename(), "78.jpg");
    }

    #[test]
    fn url_without_slug_falls_back_to_id() {
        let proxy = proxy(json!({
            "id": 99,
            "url": "https://www.pexels.com/photo/99/"
        }));

        assert_eq!(proxy.label(), "99");
        assert_eq!(proxy.filename(), "99.jpg");
    }

    #[test]
    fn fixed_metadata() {
        let proxy = proxy(json!({"id": 1, "width": 640, "height": 480}));

        assert_eq!(proxy.media_type(), "image/jpeg");
        assert_eq!(proxy.file_size(), 0);
        assert_eq!(proxy.width(), Some(640));
        assert_eq!(proxy.height(), Some(480));
        assert_eq!(proxy.asset_source_identifier(), "pexels");
        assert!(!proxy.is_imported());
        assert!(proxy.local_asset_identifier().is_none());
    }

    #[test]
    fn missing_dimensions_are_absent() {
        let proxy = proxy(json!({"id": 1}));
        assert_eq!(proxy.width(), None);
        assert_eq!(proxy.height(), None);
    }

    #[test]
    fn uris_by_size() {
        let proxy = proxy(json!({
            "id": 1,
            "src": {
                "original": "https://images.pexels.com/photos/1/original.jpeg",
                "large": "https://images.pexels.com/photos/1/large.jpeg",
                "tiny": "https://images.pexels.com/photos/1/tiny.jpeg"
            }
        }));

        assert_eq!(
            proxy.thumbnail_uri().unwrap().as_str(),
            "https://images.pexels.com/photos/1/tiny.jpeg"
        );
        assert_eq!(
            proxy.preview_uri().unwrap().path(),
            "/photos/1/large.jpeg"
        );
        assert!(proxy.original_uri().is_some());
        assert_eq!(proxy.image_url(ImageSize::Portrait), "");
    }

    #[test]
    fn iptc_properties() {
        let proxy = proxy(json!({
            "id": 5,
            "url": "https://www.pexels.com/photo/misty-forest-5/",
            "photographer": "Jane Doe"
        }));

        assert!(proxy.has_iptc_property("Title"));
        assert_eq!(proxy.iptc_property("Title"), "misty forest");
        assert_eq!(
            proxy.iptc_property("CopyrightNotice"),
            "Photo by Jane Doe on Pexels"
        );
        assert!(!proxy.has_iptc_property("Keywords"));
        assert_eq!(proxy.iptc_property("Keywords"), "");
    }

    struct ImportedOnce;

    impl ImportedAssetLookup for ImportedOnce {
        fn local_asset_identifier(&self, source: &str, remote: &str) -> Option<String> {
            (source == "pexels" && remote == "42").then(|| "local-42".to_string())
        }
    }

    #[test]
    fn import_status_comes_from_lookup() {
        let source = PexelsAssetSource::with_gateway(
            "pexels",
            PexelsAssetSourceOptions::default(),
            source().gateway().clone(),
            Arc::new(ImportedOnce),
        );

        let imported = PexelsAssetProxy::new(
            Arc::new(RawPhotoRecord::from_value(json!({"id": 42})).unwrap()),
            source.clone(),
        );
        let fresh = PexelsAssetProxy::new(
            Arc::new(RawPhotoRecord::from_value(json!({"id": 43})).unwrap()),
            source,
        );

        assert!(imported.is_imported());
        assert_eq!(imported.local_asset_identifier(), Some("local-42"));
        assert!(!fresh.is_imported());
    }
}
