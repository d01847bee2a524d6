//! Per-key in-flight tracking.
//!
//! At most one fetch per [`CacheKey`] runs at a time. Batch workers and
//! `fetch_one` wait for the key; the non-blocking read path only probes it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use spritedex_core::CacheKey;

type Slot = Arc<AsyncMutex<()>>;

/// Registry of per-key locks. Cloning shares the registry.
#[derive(Debug, Clone, Default)]
pub struct InFlightLocks {
    slots: Arc<Mutex<HashMap<CacheKey, Slot>>>,
}

impl InFlightLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, key: &CacheKey) -> Slot {
        Arc::clone(self.map().entry(key.clone()).or_default())
    }

    /// Wait until `key` is free and claim it.
    pub async fn acquire(&self, key: &CacheKey) -> InFlightGuard {
        let slot = self.slot(key);
        let guard = Arc::clone(&slot).lock_owned().await;
        InFlightGuard {
            key: key.clone(),
            locks: self.clone(),
            slot,
            guard: Some(guard),
        }
    }

    /// Claim `key` only if nobody holds it.
    pub fn try_acquire(&self, key: &CacheKey) -> Option<InFlightGuard> {
        let slot = self.slot(key);
        let guard = Arc::clone(&slot).try_lock_owned().ok()?;
        Some(InFlightGuard {
            key: key.clone(),
            locks: self.clone(),
            slot,
            guard: Some(guard),
        })
    }

    /// Whether a fetch for `key` currently holds its lock.
    pub fn is_in_flight(&self, key: &CacheKey) -> bool {
        self.map()
            .get(key)
            .is_some_and(|slot| slot.try_lock().is_err())
    }

    /// Number of keys with a registered slot.
    pub fn len(&self) -> usize {
        self.map().len()
    }

    /// Whether no key has a registered slot.
    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

/// Holds one key's lock; releases it on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    key: CacheKey,
    locks: InFlightLocks,
    slot: Slot,
    guard: Option<OwnedMutexGuard<()>>,
}

impl InFlightGuard {
    /// The key this guard holds.
    pub const fn key(&self) -> &CacheKey {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut map = self.locks.map();
        // Only the registry and this guard still reference the slot: no waiters.
        if Arc::strong_count(&self.slot) == 2 {
            if map.get(&self.key).is_some_and(|s| Arc::ptr_eq(s, &self.slot)) {
                map.remove(&self.key);
            }
        }
    }
}
