//! Raw photo record type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ImageSize;

/// One photo object exactly as the API returned it.
///
/// The record is schema-agnostic: fields are read on demand and a missing or
/// mistyped field reads as absent. Records are shared behind `Arc` by the
/// caches and never mutated after decoding.
///
/// # Example
///
/// ```
/// use pexels_core::{ImageSize, RawPhotoRecord};
/// use serde_json::json;
///
/// let record = RawPhotoRecord::from_value(json!({
///     "id": 2014422,
///     "width": 3024,
///     "src": { "tiny": "https://images.pexels.com/photos/2014422/tiny.jpeg" }
/// })).unwrap();
///
/// assert_eq!(record.id().as_deref(), Some("2014422"));
/// assert_eq!(record.u32_field("width"), Some(3024));
/// assert!(record.image_url(ImageSize::Tiny).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPhotoRecord(Map<String, Value>);

impl RawPhotoRecord {
    /// Wrap a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Returns the string form of the `id` field.
    ///
    /// Numeric and string ids are both accepted; anything else reads as absent.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Returns a raw field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a string field.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns a non-negative integer field that fits into `u32`.
    ///
    /// Numeric strings are accepted as well, since the record is untyped.
    pub fn u32_field(&self, key: &str) -> Option<u32> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the URL of a named size from the nested `src` object.
    pub fn image_url(&self, size: ImageSize) -> Option<&str> {
        self.0
            .get("src")
            .and_then(|src| src.get(size.as_str()))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_is_rejected() {
        assert!(RawPhotoRecord::from_value(json!([1, 2])).is_none());
        assert!(RawPhotoRecord::from_value(json!("photo")).is_none());
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        let numeric = RawPhotoRecord::from_value(json!({"id": 42})).unwrap();
        let text = RawPhotoRecord::from_value(json!({"id": "abc"})).unwrap();
        let null = RawPhotoRecord::from_value(json!({"id": null})).unwrap();

        assert_eq!(numeric.id().as_deref(), Some("42"));
        assert_eq!(text.id().as_deref(), Some("abc"));
        assert_eq!(null.id(), None);
    }

    #[test]
    fn dimensions_are_absent_when_missing_or_invalid() {
        let record = RawPhotoRecord::from_value(json!({
            "width": "640",
            "height": -1
        }))
        .unwrap();

        assert_eq!(record.u32_field("width"), Some(640));
        assert_eq!(record.u32_field("height"), None);
        assert_eq!(record.u32_field("depth"), None);
    }

    #[test]
    fn unknown_size_reads_as_absent() {
        let record = RawPhotoRecord::from_value(json!({
            "src": {"original": "https://example.test/o.jpeg"}
        }))
        .unwrap();

        assert_eq!(
            record.image_url(ImageSize::Original),
            Some("https://example.test/o.jpeg")
        );
        assert_eq!(record.image_url(ImageSize::Medium), None);
    }
}
