//! Resolution engine configuration.

use serde::{Deserialize, Serialize};

/// Controls how the service facade reports non-fatal data-quality findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Trace records dropped for inconsistent timestamps.
    pub log_malformed_records: bool,
    /// Trace gaps and overlaps found while building a history sequence.
    pub log_continuity_anomalies: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            log_malformed_records: true,
            log_continuity_anomalies: true,
        }
    }
}
