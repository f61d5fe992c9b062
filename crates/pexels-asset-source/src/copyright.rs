//! Copyright notice rendering.

/// Renders the IPTC copyright notice of a photo.
///
/// The template is plain text with a `{user.name}` placeholder that is
/// replaced by the photographer's name.
///
/// ```
/// use pexels_asset_source::CopyrightNoticeTemplate;
///
/// let template = CopyrightNoticeTemplate::new("Photo by {user.name} on Pexels");
/// assert_eq!(template.render("Jane Doe"), "Photo by Jane Doe on Pexels");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyrightNoticeTemplate(String);

impl CopyrightNoticeTemplate {
    /// Placeholder for the photographer's name.
    pub const NAME_PLACEHOLDER: &'static str = "{user.name}";

    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Returns the raw template.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, photographer: &str) -> String {
        self.0.replace(Self::NAME_PLACEHOLDER, photographer)
    }
}
