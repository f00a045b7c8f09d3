//! # registry-lookup
//!
//! Resolves an area code and road code through the geography hierarchy.
//! Every hop is a point-in-time bitemporal selection over the node's own
//! data versions; a missing hop ends the walk and leaves the remaining
//! levels empty.

pub mod cache;
pub mod resolver;
pub mod result;

pub use cache::LookupCache;
pub use resolver::GeoLookupResolver;
pub use result::{GeoLookupRequest, GeoLookupResult, ResolvedNode};
