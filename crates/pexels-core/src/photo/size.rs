//! Named image size variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named rendition in a photo's `src` object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// The uploaded image; its size is given by `width` and `height`.
    Original,
    /// At most 940px wide and 650px high, original aspect ratio.
    Large,
    /// At most 1880px wide and 1300px high, original aspect ratio.
    #[serde(rename = "large2x")]
    Large2x,
    /// 350px high, flexible width.
    Medium,
    /// 130px high, flexible width.
    Small,
    /// 800x1200px.
    Portrait,
    /// 1200x627px.
    Landscape,
    /// 280x200px.
    Tiny,
}

impl ImageSize {
    /// All sizes in the order the API documents them.
    pub const ALL: [ImageSize; 8] = [
        ImageSize::Original,
        ImageSize::Large,
        ImageSize::Large2x,
        ImageSize::Medium,
        ImageSize::Small,
        ImageSize::Portrait,
        ImageSize::Landscape,
        ImageSize::Tiny,
    ];

    /// Returns the key used in the `src` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Original => "original",
            ImageSize::Large => "large",
            ImageSize::Large2x => "large2x",
            ImageSize::Medium => "medium",
            ImageSize::Small => "small",
            ImageSize::Portrait => "portrait",
            ImageSize::Landscape => "landscape",
            ImageSize::Tiny => "tiny",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| format!("unknown image size '{}'", s))
    }
}
