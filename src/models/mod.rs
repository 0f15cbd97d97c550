//! Data transfer objects (DTOs) for the upstream API and our responses.
//!
//! These structs mirror the JSON shape returned by the trending API and are
//! re-serialized unchanged by the JSON endpoint.
//! - `trending`: TrendingRepo, Contributor

pub mod trending;

pub use trending::*;
