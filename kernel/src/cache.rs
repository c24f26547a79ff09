//! Per-radix caches for `pi` and `logRadix` (spec §3, §9).
//!
//! One cache entry per radix that has ever been exercised, each behind its own
//! mutex. A coordinator map (itself behind a single lock, held only long enough to
//! look up or insert a radix's entry) hands out `Arc<Mutex<RadixCache>>` handles so
//! two threads computing at different radices never block each other, while two
//! threads computing at the same radix serialize on that radix's token: the first
//! does the expensive work, the second observes the published value.
//!
//! Without `std` there is no portable mutex available in this pack, so the cache
//! degenerates to "always recompute" — correct, just not incremental.

use florix_num::Float;

use crate::pi::Splitting;

/// Everything cached for one radix.
#[derive(Clone)]
pub struct RadixCache {
    pub pi: Option<Float>,
    pub log_radix: Option<Float>,
    pub splitting: Option<Splitting>,
}

impl RadixCache {
    fn empty() -> Self {
        RadixCache {
            pi: None,
            log_radix: None,
            splitting: None,
        }
    }
}

#[cfg(feature = "std")]
mod backend {
    use super::RadixCache;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    static COORDINATOR: once_cell::sync::Lazy<Mutex<HashMap<u32, Arc<Mutex<RadixCache>>>>> =
        once_cell::sync::Lazy::new(|| Mutex::new(HashMap::new()));

    /// Returns the token (a shared, individually-locked handle) for `radix`,
    /// creating an empty cache entry the first time this radix is seen.
    pub fn token(radix: u32) -> Arc<Mutex<RadixCache>> {
        let mut coordinator = COORDINATOR.lock().unwrap();
        coordinator
            .entry(radix)
            .or_insert_with(|| Arc::new(Mutex::new(RadixCache::empty())))
            .clone()
    }

    /// Runs `f` with exclusive access to `radix`'s cache entry.
    pub fn with_cache<T>(radix: u32, f: impl FnOnce(&mut RadixCache) -> T) -> T {
        let handle = token(radix);
        let mut guard = handle.lock().unwrap();
        f(&mut guard)
    }
}

#[cfg(not(feature = "std"))]
mod backend {
    use super::RadixCache;

    /// No portable mutex is available without `std`; every call gets a fresh,
    /// unshared cache, so callers always recompute from scratch.
    pub fn with_cache<T>(_radix: u32, f: impl FnOnce(&mut RadixCache) -> T) -> T {
        let mut cache = RadixCache::empty();
        f(&mut cache)
    }
}

pub use backend::with_cache;
