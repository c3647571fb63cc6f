//! Propelling nozzle model.

use tj_core::Real;
use tj_core::constants::CP_AIR;

/// How the nozzle efficiency is applied to the expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NozzleLaw {
    /// Velocity coefficient: `V = sqrt(2 cp ΔT) * eta`
    Velocity,
    /// Kinetic energy efficiency: `V = sqrt(2 eta cp ΔT)`
    KineticEnergy,
}

/// Convergent nozzle expanding the exhaust to ambient temperature.
///
/// The plain (dry) nozzle applies its efficiency as a velocity coefficient;
/// downstream of an afterburner it is applied to the kinetic energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nozzle {
    /// Nozzle efficiency (0 < eta <= 1)
    pub eta: Real,
    /// Efficiency law
    pub law: NozzleLaw,
}

impl Nozzle {
    /// Create a nozzle with the velocity-coefficient law.
    pub fn new(eta: Real) -> Self {
        Self {
            eta,
            law: NozzleLaw::Velocity,
        }
    }

    /// Create a nozzle with specified law.
    pub fn with_law(mut self, law: NozzleLaw) -> Self {
        self.law = law;
        self
    }

    /// Exhaust velocity for gas at `t_exit` expanding to `t_ambient` [m/s].
    ///
    /// NaN when `t_exit < t_ambient`.
    pub fn exit_velocity(&self, t_exit: Real, t_ambient: Real) -> Real {
        let delta_t = t_exit - t_ambient;
        match self.law {
            NozzleLaw::Velocity => (2.0 * CP_AIR * delta_t).sqrt() * self.eta,
            NozzleLaw::KineticEnergy => (2.0 * self.eta * CP_AIR * delta_t).sqrt(),
        }
    }
}
