//! Float parameter set with derived quantities

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::constants::{BODY_DENSITY, OMEGA_MIN};
use crate::physics::flow::derive_flow;

/// Physical parameters of a piston-driven profiling float.
///
/// The mass, displaced volume, and piston flow are derived from the
/// geometric and kinematic inputs at construction time. The struct is an
/// immutable value: changing an input goes through one of the `with_*`
/// builders, which recompute the derived fields, so a parameter set can
/// never carry stale derived values.
///
/// No input validation is performed. Negative or zero geometry is accepted
/// and yields mathematically consistent but physically meaningless results;
/// callers are responsible for supplying sane values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatParameters {
    /// Float body radius (m)
    pub radius: f64,
    /// Float body length (m)
    pub length: f64,
    /// Added-mass coefficient (dimensionless)
    pub added_mass: f64,
    /// Piston-screw rotation rate (rad/s)
    pub omega: f64,
    /// Screw lead, displacement per full revolution (m)
    pub lead: f64,
    /// Piston radius (m)
    pub piston_radius: f64,
    /// Derived float mass, `1000 * pi * r^2 * L` (kg)
    pub mass: f64,
    /// Derived displaced volume, `pi * r^2 * L` (m^3)
    pub volume: f64,
    /// Derived piston volumetric flow (m^3/s)
    pub flow: f64,
}

impl FloatParameters {
    /// Create a parameter set, computing the derived mass, volume, and flow.
    pub fn new(
        radius: f64,
        length: f64,
        added_mass: f64,
        omega: f64,
        lead: f64,
        piston_radius: f64,
    ) -> Self {
        let cross_section = PI * radius * radius;
        Self {
            radius,
            length,
            added_mass,
            omega,
            lead,
            piston_radius,
            mass: BODY_DENSITY * cross_section * length,
            volume: cross_section * length,
            flow: derive_flow(omega, lead, piston_radius),
        }
    }

    /// Return a copy with a different added-mass coefficient.
    pub fn with_added_mass(self, added_mass: f64) -> Self {
        Self { added_mass, ..self }
    }

    /// Return a copy with a different rotation rate, recomputing the flow.
    pub fn with_rotation_rate(self, omega: f64) -> Self {
        Self {
            omega,
            flow: derive_flow(omega, self.lead, self.piston_radius),
            ..self
        }
    }

    /// Return a copy with different body geometry, recomputing mass and volume.
    pub fn with_geometry(self, radius: f64, length: f64) -> Self {
        let cross_section = PI * radius * radius;
        Self {
            radius,
            length,
            mass: BODY_DENSITY * cross_section * length,
            volume: cross_section * length,
            ..self
        }
    }
}

impl Default for FloatParameters {
    /// ENSTA float geometry: 6 cm radius, 50 cm length, added mass 1,
    /// slowest rotation rate, 17.5 mm lead, 25 mm piston radius.
    fn default() -> Self {
        Self::new(0.06, 0.5, 1.0, OMEGA_MIN, 0.0175, 0.025)
    }
}
