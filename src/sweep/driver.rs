//! Parameter sweep driver
//!
//! Evaluates the closed-form kinematics over sampled time and velocity
//! grids for every combination of added mass and rotation rate in the
//! sweep configuration. Each sweep point gets its own immutable
//! [`FloatParameters`] value, so no curve can observe stale derived
//! quantities from a previous point.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::core::params::FloatParameters;
use crate::physics::error::KinematicsError;
use crate::physics::kinematics::{depth_to_velocity, position, time_to_velocity, velocity};
use crate::sweep::regime::{CurveStyle, RotationRegime};
use crate::utils::config::SweepConfig;

/// Which kinematic quantity a curve samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveQuantity {
    /// Depth over time
    Position,
    /// Speed over time
    Velocity,
    /// Time needed to reach a target speed
    TimeToVelocity,
    /// Depth needed to reach a target speed
    DepthToVelocity,
}

impl CurveQuantity {
    /// Axis labels for formatted output, `(x, y)`.
    pub fn axis_labels(self) -> (&'static str, &'static str) {
        match self {
            CurveQuantity::Position => ("time_s", "depth_m"),
            CurveQuantity::Velocity => ("time_s", "speed_m_per_s"),
            CurveQuantity::TimeToVelocity => ("target_speed_m_per_s", "time_s"),
            CurveQuantity::DepthToVelocity => ("target_speed_m_per_s", "depth_m"),
        }
    }
}

/// One sampled curve from a parameter sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCurve {
    /// Human-readable legend entry, e.g. `a = 1, u = 7.101e-6 m^3/s`
    pub label: String,
    /// Parameter set this curve was evaluated with
    pub params: FloatParameters,
    /// Rotation regime of the sweep point
    pub regime: RotationRegime,
    /// Plotting style keyed to the (added mass, rotation rate) bucket
    pub style: CurveStyle,
    /// Quantity sampled on the y axis
    pub quantity: CurveQuantity,
    /// Sample grid
    pub x: DVector<f64>,
    /// Sampled values, same length as `x`
    pub y: DVector<f64>,
}

/// Evenly spaced sample grid over `[start, end]` with `samples` points.
pub fn linspace(start: f64, end: f64, samples: usize) -> DVector<f64> {
    if samples < 2 {
        return DVector::from_element(samples, start);
    }
    let step = (end - start) / (samples - 1) as f64;
    DVector::from_fn(samples, |i, _| start + step * i as f64)
}

/// Sweep driver evaluating comparison curves over a configuration
pub struct SweepDriver {
    config: SweepConfig,
}

impl SweepDriver {
    /// Create a driver over a sweep configuration.
    pub fn new(config: SweepConfig) -> Self {
        Self { config }
    }

    /// Create a driver over the default ENSTA sweep.
    pub fn with_defaults() -> Self {
        Self::new(SweepConfig::default())
    }

    /// Borrow the configuration driving this sweep.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Depth-over-time curves for every sweep point.
    pub fn position_sweep(&self) -> Result<Vec<SweepCurve>, KinematicsError> {
        self.time_sweep(CurveQuantity::Position, position)
    }

    /// Speed-over-time curves for every sweep point.
    pub fn velocity_sweep(&self) -> Result<Vec<SweepCurve>, KinematicsError> {
        self.time_sweep(CurveQuantity::Velocity, velocity)
    }

    /// Time needed to reach each target speed in the velocity grid.
    pub fn time_to_velocity_curve(
        &self,
        params: &FloatParameters,
    ) -> Result<SweepCurve, KinematicsError> {
        self.velocity_curve(CurveQuantity::TimeToVelocity, params, time_to_velocity)
    }

    /// Depth needed to reach each target speed in the velocity grid.
    pub fn depth_to_velocity_curve(
        &self,
        params: &FloatParameters,
    ) -> Result<SweepCurve, KinematicsError> {
        self.velocity_curve(CurveQuantity::DepthToVelocity, params, depth_to_velocity)
    }

    fn time_sweep(
        &self,
        quantity: CurveQuantity,
        eval: fn(f64, &FloatParameters) -> Result<f64, KinematicsError>,
    ) -> Result<Vec<SweepCurve>, KinematicsError> {
        let span = &self.config.time_span;
        let grid = linspace(span.start, span.end, span.samples);
        let mut curves =
            Vec::with_capacity(self.config.added_mass_values.len() * self.config.rotation_rates.len());

        for &added_mass in &self.config.added_mass_values {
            for &omega in &self.config.rotation_rates {
                // A fresh immutable value per sweep point
                let params = self
                    .config
                    .base_parameters
                    .with_added_mass(added_mass)
                    .with_rotation_rate(omega);
                curves.push(Self::evaluate(quantity, params, &grid, eval)?);
            }
        }
        Ok(curves)
    }

    fn velocity_curve(
        &self,
        quantity: CurveQuantity,
        params: &FloatParameters,
        eval: fn(f64, &FloatParameters) -> Result<f64, KinematicsError>,
    ) -> Result<SweepCurve, KinematicsError> {
        let span = &self.config.velocity_span;
        let grid = linspace(span.start, span.end, span.samples);
        Self::evaluate(quantity, *params, &grid, eval)
    }

    fn evaluate(
        quantity: CurveQuantity,
        params: FloatParameters,
        grid: &DVector<f64>,
        eval: fn(f64, &FloatParameters) -> Result<f64, KinematicsError>,
    ) -> Result<SweepCurve, KinematicsError> {
        let mut y = DVector::zeros(grid.len());
        for (i, &x) in grid.iter().enumerate() {
            y[i] = eval(x, &params)?;
        }
        Ok(SweepCurve {
            label: Self::legend_label(&params),
            regime: RotationRegime::classify(params.omega),
            style: CurveStyle::for_sweep_point(params.added_mass, params.omega),
            quantity,
            params,
            x: grid.clone(),
            y,
        })
    }

    fn legend_label(params: &FloatParameters) -> String {
        format!(
            "a = {}, u = {:.3e} m^3/s",
            params.added_mass, params.flow
        )
    }
}
