//! tj-atmosphere: International Standard Atmosphere (ISA) model.
//!
//! Maps geopotential altitude to ambient temperature, pressure and density
//! using the two lowest ISA layers:
//!
//! ```text
//! troposphere  (h < 11 000 m):  T = 288.15 - 0.0065 h
//!                               P = 101325 (T / 288.15)^(g / (0.0065 R))
//! stratosphere (h >= 11 000 m): T = 216.65
//!                               P = 22632 exp(-g (h - 11000) / (R T))
//! both:                         rho = P / (R T)
//! ```
//!
//! The model is only physically meaningful for roughly -500 m to 50 000 m but
//! no range is enforced here; rejecting altitudes is left to configuration
//! validation.
//!
//! # Example
//!
//! ```
//! let sea_level = tj_atmosphere::evaluate(0.0);
//! assert!((sea_level.temperature_k() - 288.15).abs() < 1e-9);
//! assert!((sea_level.density_kg_m3() - 1.225).abs() < 1e-3);
//! ```

pub mod isa;

pub use isa::{AtmosphereState, Layer, evaluate, stratosphere, troposphere};
