//! tj-core: stable foundation for the turbojet simulator.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - constants (air properties, ISA reference values)
//! - numeric (Real + finiteness and range checks)
//! - error (shared error types)
//! - timing (opt-in wall clock instrumentation)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod timing;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::TjError;
pub use numeric::*;
pub use units::*;
