//! Endpoint definitions and response decoding.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use pexels_core::error::TransferError;
use pexels_core::{PagedResult, RawPhotoRecord, Result};

/// Query parameters shared by the list endpoints.
#[derive(Debug, Serialize)]
pub struct PageQuery<'a> {
    pub per_page: u32,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
}

/// Decode a list endpoint body into a page.
///
/// A missing `photos` array yields an empty page and a missing
/// `total_results` falls back to the number of records. Entries that are
/// not JSON objects are skipped.
pub fn decode_page(body: &[u8]) -> Result<PagedResult> {
    let mut value: Value = serde_json::from_slice(body).map_err(|e| TransferError::Decode {
        message: e.to_string(),
    })?;

    let total_results = value.get("total_results").and_then(Value::as_u64);

    let photos = match value.get_mut("photos").map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(RawPhotoRecord::from_value)
            .map(Arc::new)
            .collect(),
        _ => Vec::new(),
    };

    Ok(PagedResult::new(photos, total_results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn decodes_photos_and_total() {
        let page = decode_page(&body(json!({
            "page": 1,
            "per_page": 2,
            "photos": [{"id": 1}, {"id": 2}],
            "total_results": 8000
        })))
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.total_results(), 8000);
        assert_eq!(page.get(1).unwrap().id().as_deref(), Some("2"));
    }

    #[test]
    fn missing_photos_is_an_empty_page() {
        let page = decode_page(&body(json!({"total_results": 0}))).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_results(), 0);
    }

    #[test]
    fn missing_total_falls_back_to_count() {
        let page = decode_page(&body(json!({"photos": [{"id": 1}, {"id": 2}, {"id": 3}]}))).unwrap();
        assert_eq!(page.total_results(), 3);
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let page = decode_page(&body(json!({"photos": [{"id": 1}, 7, null]}))).unwrap();
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode_page(b"<html>rate limited</html>").unwrap_err();
        assert!(err.is_transfer());
        assert!(err.to_string().contains("decode"));
    }

    #[test]
    fn search_query_is_serialized_only_when_present() {
        let curated = PageQuery {
            per_page: 20,
            page: 1,
            query: None,
        };
        let search = PageQuery {
            per_page: 20,
            page: 2,
            query: Some("ocean"),
        };

        assert_eq!(
            serde_json::to_value(&curated).unwrap(),
            json!({"per_page": 20, "page": 1})
        );
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"per_page": 20, "page": 2, "query": "ocean"})
        );
    }
}
