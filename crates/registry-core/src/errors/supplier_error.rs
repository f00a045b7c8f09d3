/// Failures reported by external candidate and lookup-node suppliers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier unavailable: {0}")]
    Unavailable(String),

    #[error("supplier query failed: {0}")]
    QueryFailed(String),
}
