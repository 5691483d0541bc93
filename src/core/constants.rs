//! Physical constants and float hardware limits

use std::f64::consts::PI;

/// Gravitational acceleration (m/s^2)
pub const G: f64 = 9.81;

/// Water density under standard conditions (kg/m^3)
pub const RHO_WATER: f64 = 997.0;

/// Density used for the float body mass derivation (kg/m^3)
pub const BODY_DENSITY: f64 = 1000.0;

/// Slowest piston-screw rotation rate of the ENSTA float (rad/s), 12.4 rpm
pub const OMEGA_MIN: f64 = 12.4 * 2.0 * PI / 60.0;

/// Fastest piston-screw rotation rate of the ENSTA float (rad/s), 124 rpm
pub const OMEGA_MAX: f64 = 124.0 * 2.0 * PI / 60.0;

/// Midpoint of the rotation-rate range (rad/s)
pub const OMEGA_MID: f64 = (OMEGA_MIN + OMEGA_MAX) / 2.0;
