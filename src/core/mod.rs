//! Core constants and parameter types

pub mod constants;
pub mod params;

pub use constants::{BODY_DENSITY, G, OMEGA_MAX, OMEGA_MID, OMEGA_MIN, RHO_WATER};
pub use params::FloatParameters;
