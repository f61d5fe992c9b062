//! Lazy cursor over one page of query results.

use std::iter::FusedIterator;
use std::sync::Arc;

use pexels_core::{AssetProxyQueryResult, Error, PagedResult, Result};

use crate::proxy::PexelsAssetProxy;
use crate::query::PexelsAssetProxyQuery;

/// Result of a [`PexelsAssetProxyQuery`].
///
/// Holds one fetched page and a cursor position into it. Proxies are built
/// on every access and are not cached, so two calls for the same index
/// return distinct, equal-content proxies.
#[derive(Debug, Clone)]
pub struct PexelsAssetProxyQueryResult {
    query: PexelsAssetProxyQuery,
    page: Arc<PagedResult>,
    position: usize,
}

impl PexelsAssetProxyQueryResult {
    pub(crate) fn new(query: PexelsAssetProxyQuery, page: Arc<PagedResult>) -> Self {
        Self {
            query,
            page,
            position: 0,
        }
    }

    /// Total number of results the API declared for the query.
    ///
    /// This is a hint and may exceed what can actually be paged through.
    pub fn total_results(&self) -> u64 {
        self.page.total_results()
    }

    /// Iterate over the page without moving the cursor.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            result: self,
            index: 0,
        }
    }

    fn proxy_at(&self, index: usize) -> Option<PexelsAssetProxy> {
        self.page
            .get(index)
            .map(|photo| PexelsAssetProxy::new(Arc::clone(photo), self.query.source().clone()))
    }
}

impl AssetProxyQueryResult for PexelsAssetProxyQueryResult {
    type Query = PexelsAssetProxyQuery;
    type Proxy = PexelsAssetProxy;

    fn query(&self) -> Self::Query {
        self.query.clone()
    }

    fn first(&self) -> Option<Self::Proxy> {
        self.proxy_at(0)
    }

    fn current(&self) -> Option<Self::Proxy> {
        self.proxy_at(self.position)
    }

    fn next(&mut self) {
        if self.position < self.page.len() {
            self.position += 1;
        }
    }

    fn key(&self) -> usize {
        self.position
    }

    fn valid(&self) -> bool {
        self.position < self.page.len()
    }

    fn rewind(&mut self) {
        self.position = 0;
    }

    fn get(&self, index: usize) -> Result<Self::Proxy> {
        self.proxy_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.page.len(),
        })
    }

    fn count(&self) -> usize {
        self.page.len()
    }

    fn to_array(&self) -> Result<Vec<Self::Proxy>> {
        Err(Error::NotImplemented {
            operation: "to_array",
        })
    }

    fn remove(&mut self, _index: usize) -> Result<()> {
        Err(Error::NotImplemented {
            operation: "remove",
        })
    }
}

/// Iterator over the proxies of a result page.
#[derive(Debug)]
pub struct Iter<'a> {
    result: &'a PexelsAssetProxyQueryResult,
    index: usize,
}

impl Iterator for Iter<'_> {
    type Item = PexelsAssetProxy;

    fn next(&mut self) -> Option<Self::Item> {
        let proxy = self.result.proxy_at(self.index)?;
        self.index += 1;
        Some(proxy)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.result.page.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PexelsAssetProxyQueryResult {
    type Item = PexelsAssetProxy;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PexelsAssetSource, PexelsAssetSourceOptions};
    use pexels_core::{AssetProxy, RawPhotoRecord};
    use serde_json::json;

    fn result_with(ids: &[u64]) -> PexelsAssetProxyQueryResult {
        let source =
            PexelsAssetSource::from_options("pexels", PexelsAssetSourceOptions::default()).unwrap();
        let photos = ids
            .iter()
            .map(|id| Arc::new(RawPhotoRecord::from_value(json!({ "id": id })).unwrap()))
            .collect();
        PexelsAssetProxyQueryResult::new(source.query(), Arc::new(PagedResult::new(photos, None)))
    }

    #[test]
    fn cursor_walks_the_page_once() {
        let mut result = result_with(&[1, 2, 3]);
        let mut seen = Vec::new();

        while result.valid() {
            seen.push(result.current().unwrap().identifier());
            result.next();
        }

        assert_eq!(seen, vec!["1", "2", "3"]);
        assert_eq!(result.key(), 3);
        assert!(result.current().is_none());

        result.next();
        assert_eq!(result.key(), 3);
    }

    #[test]
    fn rewind_restarts_traversal() {
        let mut result = result_with(&[1, 2]);
        result.next();
        result.next();
        assert!(!result.valid());

        result.rewind();
        assert_eq!(result.key(), 0);
        assert!(result.valid());
        assert_eq!(result.current().unwrap().identifier(), "1");
    }

    #[test]
    fn empty_page_is_never_valid() {
        let mut result = result_with(&[]);
        result.rewind();

        assert!(!result.valid());
        assert!(result.first().is_none());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn get_out_of_range_fails() {
        let result = result_with(&[1, 2]);

        assert_eq!(result.get(1).unwrap().identifier(), "2");
        assert!(result.contains(1));
        assert!(!result.contains(2));
        assert!(matches!(
            result.get(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn bulk_operations_are_not_implemented() {
        let mut result = result_with(&[1]);

        assert!(matches!(
            result.to_array(),
            Err(Error::NotImplemented { .. })
        ));
        assert!(matches!(
            result.remove(0),
            Err(Error::NotImplemented { .. })
        ));
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn iter_does_not_move_cursor() {
        let mut result = result_with(&[4, 5, 6]);
        result.next();

        let ids: Vec<String> = result.iter().map(|p| p.identifier()).collect();

        assert_eq!(ids, vec!["4", "5", "6"]);
        assert_eq!(result.iter().len(), 3);
        assert_eq!(result.key(), 1);
    }
}
