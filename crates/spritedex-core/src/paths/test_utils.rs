//! Scoped control of `SPRITEDEX_DATA_DIR` for resolver tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::resolver::DATA_DIR_ENV;

/// Resolver tests read process-wide state; only one may touch it at a time.
static DATA_DIR_LOCK: Mutex<()> = Mutex::new(());

/// Holds the data-dir override for the lifetime of one test.
///
/// The previous value is put back on drop, before the lock is released.
pub struct DataDirOverride {
    previous: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl DataDirOverride {
    /// Point `SPRITEDEX_DATA_DIR` at `value` until the guard drops.
    #[allow(unsafe_code)]
    pub fn set(value: &str) -> Self {
        let lock = DATA_DIR_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let previous = env::var(DATA_DIR_ENV).ok();
        // SAFETY: every writer of this variable holds DATA_DIR_LOCK.
        unsafe {
            env::set_var(DATA_DIR_ENV, value);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for DataDirOverride {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the lock is still held; `_lock` drops after this body.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(DATA_DIR_ENV, value),
                None => env::remove_var(DATA_DIR_ENV),
            }
        }
    }
}
