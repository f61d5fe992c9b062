//! Asset source options.

use std::fmt;

use serde::Deserialize;

/// Resolved settings of a Pexels asset source.
///
/// Field names follow the host's camelCase configuration keys.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PexelsAssetSourceOptions {
    /// Pexels API key. Required for any request.
    pub access_key: String,

    /// Outbound proxy URL, `http://`, `https://` or `tcp://`.
    pub proxy: Option<String>,

    /// Template for the IPTC copyright notice, see [`CopyrightNoticeTemplate`](crate::CopyrightNoticeTemplate).
    #[serde(alias = "copyRightNoticeTemplate")]
    pub copyright_notice_template: String,

    /// Term used when a query has none. Empty means the curated feed.
    pub default_search_term: String,

    /// Icon shown in the media browser.
    pub icon_path: Option<String>,

    /// Description shown in the media browser.
    pub description: Option<String>,
}

// Hide the API key in Debug output
impl fmt::Debug for PexelsAssetSourceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PexelsAssetSourceOptions")
            .field("access_key", &"[REDACTED]")
            .field("proxy", &self.proxy)
            .field("copyright_notice_template", &self.copyright_notice_template)
            .field("default_search_term", &self.default_search_term)
            .field("icon_path", &self.icon_path)
            .field("description", &self.description)
            .finish()
    }
}
