//! Parameter sweeps, regime classification, and curve output

pub mod driver;
pub mod formatting;
pub mod regime;

pub use driver::{linspace, CurveQuantity, SweepCurve, SweepDriver};
pub use formatting::{CurveFormatter, OutputFormat};
pub use regime::{CurveColor, CurveStyle, LineStyle, RotationRegime};
