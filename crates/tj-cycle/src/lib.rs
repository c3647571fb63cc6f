//! tj-cycle: steady-state turbojet cycle.
//!
//! An [`EngineCycle`] is built from [`EngineParameters`], evaluates the ISA
//! once at the configured altitude, and chains
//! compressor → combustor → turbine → (afterburner) → nozzle on every call to
//! [`EngineCycle::simulate`], returning a fresh [`SimulationResult`] in SI
//! base units.
//!
//! The cycle never fails. Parameters outside their physical domain produce
//! non-physical numbers (NaN, infinities, negative temperatures); range
//! checking belongs to configuration validation before construction. A
//! non-positive net thrust is a defined degenerate state: thrust is clamped
//! to zero, TSFC is `+∞` and specific impulse is zero.
//!
//! # Example
//!
//! ```
//! use tj_cycle::{EngineCycle, EngineParameters};
//!
//! let params = EngineParameters {
//!     altitude: 10_000.0,
//!     compression_ratio: 10.0,
//!     flight_speed: 250.0,
//!     ..EngineParameters::default()
//! };
//! let result = EngineCycle::new(params).simulate();
//! assert!(result.net_thrust > 0.0);
//! assert!(result.tsfc.is_finite());
//! ```

pub mod cycle;
pub mod parameters;
pub mod result;

pub use cycle::EngineCycle;
pub use parameters::EngineParameters;
pub use result::{CycleStationTemperatures, SimulationResult};

/// Version tag of the cycle model, used to key persisted runs.
pub const MODEL_VERSION: &str = "turbojet-ideal-1";
