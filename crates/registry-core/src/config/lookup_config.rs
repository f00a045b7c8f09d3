//! Hierarchical lookup configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Maximum cached lookup results. 0 disables the cache.
    ///
    /// Entries are keyed by the exact observation point. Callers resolving
    /// against the wall clock should pass a shared or truncated point
    /// (see `ObservationPoint::truncated_to_seconds`), otherwise every
    /// request misses.
    pub cache_capacity: u64,
    /// Time-to-live for cached results in seconds. 0 means no expiry.
    pub cache_ttl_seconds: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 10_000,
            cache_ttl_seconds: 300, // 5 minutes
        }
    }
}
