//! Lookup cache: Moka TinyLFU in-memory, keyed by observation point and
//! code tuple. Two points never share an entry, since names change over
//! time. Nanosecond wall-clock points therefore never hit; resolve against
//! a point truncated with `ObservationPoint::truncated_to_seconds` or one
//! shared across requests.

use std::time::Duration;

use moka::sync::Cache;

use registry_core::config::LookupConfig;
use registry_core::models::ObservationPoint;

use crate::result::{GeoLookupRequest, GeoLookupResult};

type CacheKey = (ObservationPoint, GeoLookupRequest);

pub struct LookupCache {
    inner: Cache<CacheKey, GeoLookupResult>,
}

impl LookupCache {
    /// Create a cache with the given capacity and optional time-to-live.
    pub fn new(capacity: u64, ttl: Option<Duration>) -> Self {
        let builder = Cache::builder().max_capacity(capacity);
        let inner = match ttl {
            Some(ttl) => builder.time_to_live(ttl).build(),
            None => builder.build(),
        };
        Self { inner }
    }

    /// `None` when the config disables caching.
    pub fn from_config(config: &LookupConfig) -> Option<Self> {
        if config.cache_capacity == 0 {
            return None;
        }
        let ttl = (config.cache_ttl_seconds > 0).then(|| Duration::from_secs(config.cache_ttl_seconds));
        Some(Self::new(config.cache_capacity, ttl))
    }

    pub fn get(&self, at: &ObservationPoint, request: &GeoLookupRequest) -> Option<GeoLookupResult> {
        self.inner.get(&(*at, request.clone()))
    }

    pub fn insert(&self, at: ObservationPoint, request: GeoLookupRequest, result: GeoLookupResult) {
        self.inner.insert((at, request), result);
    }

    /// Returns the number of entries in the cache.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }

    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
