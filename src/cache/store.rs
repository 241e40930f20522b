//! Degraded-mode cache handle used by the analysis pipeline
//!
//! The pipeline treats the cache as an optimization, never a dependency: an
//! unreachable or broken backing store behaves like an always-miss,
//! always-discard cache.

use std::sync::Mutex;
use std::time::Duration;

use crate::cache::CacheStorage;
use crate::detect::AnalysisResponse;

/// Cache handle injected into the [`crate::detect::Analyzer`] at construction.
///
/// Wraps an optional [`CacheStorage`]: `None` means degraded mode, entered
/// either explicitly (`--no-cache`) or when the backing store cannot be
/// opened. Every storage error on the get/put path is absorbed and logged.
pub struct AnalysisCache {
    storage: Option<Mutex<CacheStorage>>,
}

impl AnalysisCache {
    /// Open the default cache, degrading to no-cache mode on failure.
    pub fn open(enabled: bool) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match CacheStorage::open() {
            Ok(storage) => Self {
                storage: Some(Mutex::new(storage)),
            },
            Err(e) => {
                log::warn!("Cache unavailable, continuing without it: {}", e);
                Self::disabled()
            }
        }
    }

    /// A cache handle that never stores anything.
    pub fn disabled() -> Self {
        Self { storage: None }
    }

    /// Wrap an already-open storage (for testing).
    #[allow(dead_code)]
    pub fn with_storage(storage: CacheStorage) -> Self {
        Self {
            storage: Some(Mutex::new(storage)),
        }
    }

    /// Look up a cached analysis. Absent, expired, unreadable, and
    /// undecodable entries are all misses.
    pub fn get(&self, key: &str) -> Option<AnalysisResponse> {
        let storage = self.storage.as_ref()?;
        let guard = storage.lock().ok()?;

        match guard.get(key) {
            Ok(Some(body)) => match serde_json::from_slice(&body) {
                Ok(response) => {
                    log::debug!("Cache hit: {}", key);
                    Some(response)
                }
                Err(e) => {
                    log::warn!("Discarding undecodable cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("Cache miss: {}", key);
                None
            }
            Err(e) => {
                log::warn!("Cache read failed, treating as miss: {}", e);
                None
            }
        }
    }

    /// Store an analysis. Write failures are logged and ignored.
    pub fn put(&self, key: &str, response: &AnalysisResponse, ttl: Duration) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        let Ok(guard) = storage.lock() else {
            return;
        };
        let Ok(body) = serde_json::to_vec(response) else {
            return;
        };

        if let Err(e) = guard.put(key, &response.url, &body, ttl) {
            log::warn!("Cache write failed, discarding: {}", e);
        } else {
            log::debug!("Cached {} (TTL {}s)", key, ttl.as_secs());
        }
    }
}
