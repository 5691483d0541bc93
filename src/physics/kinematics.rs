//! Closed-form vertical kinematics of a piston-driven float
//!
//! With the float starting at rest (z = 0, v = 0) and the piston running at
//! a constant flow `u`, the buoyancy force grows linearly in time and the
//! closed forms are
//!
//! ```text
//! z(t) = u * g * rho_w * t^3 / (6 * m * (1 + a))
//! v(t) = u * g * rho_w * t^2 / (2 * m * (1 + a))
//! ```
//!
//! together with their algebraic inverses for a target velocity.

use crate::core::constants::{G, RHO_WATER};
use crate::core::params::FloatParameters;
use crate::physics::error::KinematicsError;

/// Float depth after `t` seconds, for initial conditions z = 0 and v = 0.
///
/// Fails with `DegenerateAddedMass` when `1 + a == 0`; every other input is
/// accepted unchecked.
pub fn position(t: f64, params: &FloatParameters) -> Result<f64, KinematicsError> {
    let inertia = inertia_factor(params)?;
    Ok(params.flow * G * RHO_WATER * t.powi(3) / (6.0 * inertia))
}

/// Float vertical speed after `t` seconds, for initial conditions z = 0 and
/// v = 0. Analytic time derivative of [`position`].
pub fn velocity(t: f64, params: &FloatParameters) -> Result<f64, KinematicsError> {
    let inertia = inertia_factor(params)?;
    Ok(params.flow * G * RHO_WATER * t.powi(2) / (2.0 * inertia))
}

/// Time needed for the float to reach the speed `v`.
///
/// Algebraic inverse of [`velocity`]: `t = sqrt(2 v m (1 + a) / (g rho_w u))`.
/// Fails with `ZeroFlow` when the piston flow is zero (the target speed is
/// never reached) and with `NegativeRadicand` when the sign combination of
/// the inputs puts the radicand below zero, instead of letting `sqrt`
/// propagate a NaN.
pub fn time_to_velocity(v: f64, params: &FloatParameters) -> Result<f64, KinematicsError> {
    let inertia = inertia_factor(params)?;
    if params.flow == 0.0 {
        return Err(KinematicsError::ZeroFlow { target_velocity: v });
    }
    let radicand = 2.0 * v * inertia / (G * RHO_WATER * params.flow);
    if radicand < 0.0 {
        return Err(KinematicsError::NegativeRadicand {
            radicand,
            target_velocity: v,
        });
    }
    Ok(radicand.sqrt())
}

/// Depth at which the float reaches the speed `v`.
///
/// Direct composition `position(time_to_velocity(v))`, not an independent
/// formula.
pub fn depth_to_velocity(v: f64, params: &FloatParameters) -> Result<f64, KinematicsError> {
    let t = time_to_velocity(v, params)?;
    position(t, params)
}

/// Common `m * (1 + a)` inertia term, rejecting the degenerate added mass.
fn inertia_factor(params: &FloatParameters) -> Result<f64, KinematicsError> {
    let one_plus_a = 1.0 + params.added_mass;
    if one_plus_a == 0.0 {
        return Err(KinematicsError::DegenerateAddedMass {
            added_mass: params.added_mass,
        });
    }
    Ok(params.mass * one_plus_a)
}
