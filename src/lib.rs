//! Float Kinematics
//!
//! Closed-form vertical kinematics of a buoyancy-driven profiling float
//! (ENSTA style) under a constant piston flow, with comparison sweeps over
//! added mass and piston-screw rotation rate.

pub mod core;
pub mod physics;
pub mod sweep;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{FloatParameters, G, OMEGA_MAX, OMEGA_MID, OMEGA_MIN, RHO_WATER};
pub use crate::physics::{
    depth_to_velocity, derive_flow, position, time_to_velocity, velocity, KinematicsError,
};
pub use crate::sweep::{
    linspace, CurveColor, CurveFormatter, CurveQuantity, CurveStyle, LineStyle, OutputFormat,
    RotationRegime, SweepCurve, SweepDriver,
};
pub use crate::utils::{ConfigError, SampleSpan, SweepConfig, ValidationResult};
