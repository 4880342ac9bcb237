//! gf-core: stable foundation for gridflow.
//!
//! Contains:
//! - ids (sides, port references, compact arena indices)
//! - units (voltage helpers on top of uom + float checks)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GfError, GfResult};
pub use ids::*;
pub use units::*;
