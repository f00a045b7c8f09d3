//! # registry-temporal
//!
//! Bitemporal resolution for registry attributes: point-in-time and
//! open-interval selection of the authoritative version, chronological
//! history reconstruction with continuity checks, and the request-level
//! service that fetches candidates and resolves them against one
//! observation point.

pub mod continuity;
pub mod resolution;
pub mod service;

pub use continuity::{build_sequence, Sequence};
pub use resolution::{authority_order, malformed_records, select_at, select_open};
pub use service::{EntitySnapshot, History, RegistryService, Resolved};
