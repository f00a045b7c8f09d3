pub mod lookup_config;
pub mod observability_config;
pub mod resolution_config;

use serde::{Deserialize, Serialize};

pub use lookup_config::LookupConfig;
pub use observability_config::ObservabilityConfig;
pub use resolution_config::ResolutionConfig;

use crate::errors::RegistryResult;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    pub resolution: ResolutionConfig,
    pub lookup: LookupConfig,
    pub observability: ObservabilityConfig,
}

impl RegistryConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> RegistryResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
