//! Shared fixtures for registry tests and benchmarks.

pub mod geography;
pub mod records;
pub mod suppliers;

pub use records::{ts, RecordBuilder};
pub use suppliers::{InMemoryCandidateSupplier, InMemoryLookupSupplier};
