//! Key-value caches used by the gateway.
//!
//! The gateway holds two caches: fetched pages keyed by
//! [`RequestSignature`], and individual photo records keyed by photo id.
//! Both are injected so callers can share, replace or observe them.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;

use crate::photo::{PagedResult, RawPhotoRecord, RequestSignature};

/// A minimal key-value store with interior mutability.
pub trait Cache<K, V>: Send + Sync {
    /// Returns true if an entry exists for `key`.
    fn has(&self, key: &K) -> bool;

    /// Returns a clone of the entry for `key`.
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts or replaces the entry for `key`.
    fn set(&self, key: K, value: V);
}

/// Page cache, keyed by request signature.
pub type PageCache = dyn Cache<RequestSignature, Arc<PagedResult>>;

/// Photo cache, keyed by the string form of the photo id.
pub type PhotoCache = dyn Cache<String, Arc<RawPhotoRecord>>;

/// In-memory cache without eviction.
///
/// Entries live as long as the cache itself.
pub struct MemoryCache<K, V> {
    entries: DashMap<K, V>,
}

impl<K: Eq + Hash, V> MemoryCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash, V> Default for MemoryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: K, value: V) {
        self.entries.insert(key, value);
    }
}

impl<K: Eq + Hash, V> fmt::Debug for MemoryCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entries", &self.len())
            .finish()
    }
}
