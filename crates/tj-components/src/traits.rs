//! Core traits for stage models.

use tj_core::Real;

/// A stage of the gas path that maps an inlet temperature to an outlet
/// temperature.
///
/// Stages are pure functions of their parameters and the inlet temperature,
/// suitable for evaluating many operating points in parallel.
pub trait Stage: Send + Sync {
    /// Stage name for tracing and identification.
    fn name(&self) -> &'static str;

    /// Compute the stage outlet temperature in kelvin.
    ///
    /// # Arguments
    /// * `t_in` - Inlet temperature in kelvin
    fn outlet_temperature(&self, t_in: Real) -> Real;

    /// Temperature change across the stage, positive when the gas is heated.
    fn temperature_rise(&self, t_in: Real) -> Real {
        self.outlet_temperature(t_in) - t_in
    }
}
