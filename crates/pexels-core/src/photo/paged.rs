//! Page fetch types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::RawPhotoRecord;

/// The endpoint a page is fetched from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// The editorial curated feed.
    Curated,
    /// Keyword search.
    Search,
}

impl QueryType {
    /// Returns the endpoint path relative to the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            QueryType::Curated => "curated",
            QueryType::Search => "search",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// Cache key for one page fetch.
///
/// Two requests with identical parameters share a signature and therefore a
/// page cache entry for the lifetime of the gateway.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestSignature {
    pub query_type: QueryType,
    pub per_page: u32,
    pub page: u32,
    pub term: String,
}

impl RequestSignature {
    /// Signature of a curated feed page.
    pub fn curated(per_page: u32, page: u32) -> Self {
        Self {
            query_type: QueryType::Curated,
            per_page,
            page,
            term: String::new(),
        }
    }

    /// Signature of a search result page.
    pub fn search(term: impl Into<String>, per_page: u32, page: u32) -> Self {
        Self {
            query_type: QueryType::Search,
            per_page,
            page,
            term: term.into(),
        }
    }
}

impl fmt::Display for RequestSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.query_type, self.per_page, self.page)?;
        if !self.term.is_empty() {
            write!(f, "_{}", self.term)?;
        }
        Ok(())
    }
}

/// One page of photos plus the total the API declared for the whole query.
///
/// `total_results` is a hint: it may exceed what can actually be paged
/// through, and the final page may be short.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedResult {
    photos: Vec<Arc<RawPhotoRecord>>,
    total_results: u64,
}

impl PagedResult {
    /// Create a page from decoded records.
    ///
    /// A missing total falls back to the number of records in this page.
    pub fn new(photos: Vec<Arc<RawPhotoRecord>>, total_results: Option<u64>) -> Self {
        let total_results = total_results.unwrap_or(photos.len() as u64);
        Self {
            photos,
            total_results,
        }
    }

    /// The records of this page in API order.
    pub fn photos(&self) -> &[Arc<RawPhotoRecord>] {
        &self.photos
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Arc<RawPhotoRecord>> {
        self.photos.get(index)
    }

    /// Number of records in this page.
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns true if the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Total number of results the API declared for the query.
    pub fn total_results(&self) -> u64 {
        self.total_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64) -> Arc<RawPhotoRecord> {
        Arc::new(RawPhotoRecord::from_value(json!({ "id": id })).unwrap())
    }

    #[test]
    fn missing_total_falls_back_to_page_length() {
        let page = PagedResult::new(vec![record(1), record(2)], None);
        assert_eq!(page.total_results(), 2);
    }

    #[test]
    fn declared_total_may_exceed_page() {
        let page = PagedResult::new(vec![record(1)], Some(8000));
        assert_eq!(page.len(), 1);
        assert_eq!(page.total_results(), 8000);
    }

    #[test]
    fn signatures_distinguish_query_type_and_term() {
        let curated = RequestSignature::curated(20, 1);
        let search = RequestSignature::search("ocean", 20, 1);
        let other = RequestSignature::search("forest", 20, 1);

        assert_ne!(curated, search);
        assert_ne!(search, other);
        assert_eq!(search, RequestSignature::search("ocean", 20, 1));
        assert_eq!(search.to_string(), "search_20_1_ocean");
    }
}
