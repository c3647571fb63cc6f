//! tj-components: thermodynamic stage models for a single-spool turbojet.
//!
//! Provides ideal-gas models for each stage of the gas path:
//! - Compressor with isentropic efficiency
//! - Combustor with constant-pressure heat addition
//! - Turbine sized to the compressor's shaft demand
//! - Afterburner reheat
//! - Nozzle expansion to ambient
//!
//! All stages work on static temperatures in kelvin with constant `cp` and
//! `γ` for air. They are deterministic, allocation-free and infallible:
//! out-of-domain inputs surface as NaN or infinities rather than errors.
//!
//! # Example
//!
//! ```
//! use tj_components::{Combustor, Compressor, Stage, Turbine};
//!
//! let t0 = 288.15;
//! let compressor = Compressor::new(10.0, 0.85);
//! let t2 = compressor.outlet_temperature(t0);
//!
//! let combustor = Combustor::new(0.045, 43.0e6);
//! let t3 = combustor.outlet_temperature(t2);
//!
//! let turbine = Turbine::matched_to(compressor.specific_work(t0), 0.9, 0.045);
//! let t4 = turbine.outlet_temperature(t3);
//!
//! assert!(t2 > t0 && t3 > t2 && t4 < t3);
//! ```

pub mod afterburner;
pub mod combustor;
pub mod common;
pub mod compressor;
pub mod nozzle;
pub mod traits;
pub mod turbine;

// Re-exports
pub use afterburner::Afterburner;
pub use combustor::Combustor;
pub use compressor::Compressor;
pub use nozzle::{Nozzle, NozzleLaw};
pub use traits::Stage;
pub use turbine::Turbine;
