//! Memory tier.
//!
//! A process-lifetime map from [`CacheKey`] to asset bytes. There is no
//! capacity bound or eviction policy beyond explicit per-collection eviction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bytes::Bytes;

use spritedex_core::CacheKey;

/// Shared in-memory cache. Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<CacheKey, Bytes>>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<CacheKey, Bytes>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up an entry.
    pub fn get(&self, key: &CacheKey) -> Option<Bytes> {
        self.lock().get(key).cloned()
    }

    /// Insert or replace an entry.
    pub fn put(&self, key: CacheKey, bytes: Bytes) {
        self.lock().insert(key, bytes);
    }

    /// Replace an entry only if it is already cached.
    ///
    /// Returns whether a replacement happened.
    pub fn refresh(&self, key: &CacheKey, bytes: Bytes) -> bool {
        match self.lock().get_mut(key) {
            Some(slot) => {
                *slot = bytes;
                true
            }
            None => false,
        }
    }

    /// Whether an entry is cached.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Drop every entry belonging to `slug`. Returns the number dropped.
    pub fn evict_collection(&self, slug: &str) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, _| !key.in_collection(slug));
        before - entries.len()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let cache = MemoryCache::new();
        let key = CacheKey::new("firered", "larvitar");
        cache.put(key.clone(), Bytes::from_static(b"a"));

        assert_eq!(cache.get(&key), Some(Bytes::from_static(b"a")));
        assert!(cache.contains(&key));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_refresh_only_touches_existing_entries() {
        let cache = MemoryCache::new();
        let key = CacheKey::new("firered", "larvitar");

        assert!(!cache.refresh(&key, Bytes::from_static(b"new")));
        assert!(cache.is_empty());

        cache.put(key.clone(), Bytes::from_static(b"old"));
        assert!(cache.refresh(&key, Bytes::from_static(b"new")));
        assert_eq!(cache.get(&key), Some(Bytes::from_static(b"new")));
    }

    #[test]
    fn test_evict_collection_matches_slug_exactly() {
        let cache = MemoryCache::new();
        cache.put(CacheKey::new("red", "pikachu"), Bytes::from_static(b"1"));
        cache.put(CacheKey::new("red-blue", "pikachu"), Bytes::from_static(b"2"));
        cache.put(CacheKey::new("red", "eevee"), Bytes::from_static(b"3"));

        assert_eq!(cache.evict_collection("red"), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&CacheKey::new("red-blue", "pikachu")));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = MemoryCache::new();
        let other = cache.clone();
        other.put(CacheKey::new("a", "b"), Bytes::from_static(b"x"));
        assert!(cache.contains(&CacheKey::new("a", "b")));
    }
}
