//! # registry-core
//!
//! Foundation types for the bitemporal registry resolver: the four-timestamp
//! validity window, versioned fact records, entity keys, coded lookup nodes,
//! non-fatal resolution diagnostics, collaborator traits, configuration,
//! and tracing setup.

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod models;
pub mod observability;
pub mod traits;

pub use config::RegistryConfig;
pub use errors::{RegistryError, RegistryResult, SupplierError};
