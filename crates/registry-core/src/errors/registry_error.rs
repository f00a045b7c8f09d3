use super::SupplierError;

/// Top-level error type for the registry resolver.
///
/// Data-quality problems never surface here; they are reported as
/// [`ResolutionDiagnostic`](crate::models::ResolutionDiagnostic)s. Only
/// caller mistakes and collaborator failures are fatal.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid entity key: {0}")]
    InvalidEntityKey(String),

    #[error("supplier error: {0}")]
    SupplierError(#[from] SupplierError),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for RegistryError {
    fn from(e: toml::de::Error) -> Self {
        RegistryError::ConfigError(e.to_string())
    }
}

/// Convenience type alias.
pub type RegistryResult<T> = Result<T, RegistryError>;
