//! Rotation-regime classification and curve style encoding
//!
//! Pure classification from a rotation rate to a named regime, decoupled
//! from any rendering library. The style encoding mirrors the comparison
//! plots: line style keyed to the rotation regime, color keyed to the
//! added-mass bucket.

use serde::{Deserialize, Serialize};

use crate::core::constants::{OMEGA_MAX, OMEGA_MID, OMEGA_MIN};

/// Relative tolerance for matching a rate against the named regimes
const REGIME_REL_TOLERANCE: f64 = 1e-6;

/// Named piston-screw rotation regimes of the ENSTA float
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationRegime {
    /// Slowest hardware rate, 12.4 rpm
    Minimum,
    /// Midpoint between the slowest and fastest rates
    Intermediate,
    /// Fastest hardware rate, 124 rpm
    Maximum,
    /// Any rate outside the three named buckets
    Custom,
}

impl RotationRegime {
    /// Classify a rotation rate by tolerance comparison against the named
    /// regime rates.
    pub fn classify(omega: f64) -> Self {
        if relative_match(omega, OMEGA_MIN) {
            RotationRegime::Minimum
        } else if relative_match(omega, OMEGA_MID) {
            RotationRegime::Intermediate
        } else if relative_match(omega, OMEGA_MAX) {
            RotationRegime::Maximum
        } else {
            RotationRegime::Custom
        }
    }

    /// Line style used for curves in this regime.
    pub fn line_style(self) -> LineStyle {
        match self {
            RotationRegime::Minimum => LineStyle::Dashed,
            RotationRegime::Intermediate => LineStyle::Dotted,
            RotationRegime::Maximum | RotationRegime::Custom => LineStyle::Solid,
        }
    }
}

fn relative_match(omega: f64, reference: f64) -> bool {
    (omega - reference).abs() <= REGIME_REL_TOLERANCE * reference.abs()
}

/// Line styles for plotted curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// Curve colors keyed to the added-mass bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveColor {
    Black,
    Red,
    Green,
    Default,
}

impl CurveColor {
    /// Color bucket for an added-mass coefficient: 1 is black, 2 is red,
    /// 3 is green, anything else falls back to the default color.
    pub fn from_added_mass(added_mass: f64) -> Self {
        if relative_match(added_mass, 1.0) {
            CurveColor::Black
        } else if relative_match(added_mass, 2.0) {
            CurveColor::Red
        } else if relative_match(added_mass, 3.0) {
            CurveColor::Green
        } else {
            CurveColor::Default
        }
    }
}

/// Complete style encoding for one sweep curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: CurveColor,
    pub line: LineStyle,
}

impl CurveStyle {
    /// Style for the `(added_mass, omega)` bucket a curve belongs to.
    pub fn for_sweep_point(added_mass: f64, omega: f64) -> Self {
        Self {
            color: CurveColor::from_added_mass(added_mass),
            line: RotationRegime::classify(omega).line_style(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rates_classify_exactly() {
        assert_eq!(RotationRegime::classify(OMEGA_MIN), RotationRegime::Minimum);
        assert_eq!(
            RotationRegime::classify(OMEGA_MID),
            RotationRegime::Intermediate
        );
        assert_eq!(RotationRegime::classify(OMEGA_MAX), RotationRegime::Maximum);
    }

    #[test]
    fn classification_tolerates_rounding_noise() {
        let nudged = OMEGA_MIN * (1.0 + 1e-9);
        assert_eq!(RotationRegime::classify(nudged), RotationRegime::Minimum);
    }

    #[test]
    fn off_bucket_rates_are_custom() {
        assert_eq!(RotationRegime::classify(0.0), RotationRegime::Custom);
        assert_eq!(
            RotationRegime::classify(OMEGA_MIN * 1.5),
            RotationRegime::Custom
        );
        assert_eq!(
            RotationRegime::classify(OMEGA_MAX * 2.0),
            RotationRegime::Custom
        );
    }

    #[test]
    fn line_styles_follow_the_regime() {
        assert_eq!(RotationRegime::Minimum.line_style(), LineStyle::Dashed);
        assert_eq!(RotationRegime::Intermediate.line_style(), LineStyle::Dotted);
        assert_eq!(RotationRegime::Maximum.line_style(), LineStyle::Solid);
        assert_eq!(RotationRegime::Custom.line_style(), LineStyle::Solid);
    }

    #[test]
    fn colors_follow_the_added_mass_bucket() {
        assert_eq!(CurveColor::from_added_mass(1.0), CurveColor::Black);
        assert_eq!(CurveColor::from_added_mass(2.0), CurveColor::Red);
        assert_eq!(CurveColor::from_added_mass(3.0), CurveColor::Green);
        assert_eq!(CurveColor::from_added_mass(1.5), CurveColor::Default);
    }

    #[test]
    fn sweep_point_style_combines_both_buckets() {
        let style = CurveStyle::for_sweep_point(2.0, OMEGA_MID);
        assert_eq!(style.color, CurveColor::Red);
        assert_eq!(style.line, LineStyle::Dotted);
    }
}
