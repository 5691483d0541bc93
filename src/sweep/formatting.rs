//! Curve output formatting
//!
//! Serializes sweep curves into the formats a charting or postprocessing
//! tool consumes: an aligned text table, CSV with a header row, or JSON.

use serde::{Deserialize, Serialize};

use crate::sweep::driver::SweepCurve;

/// Supported curve output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Formatter converting sweep curves to textual output
pub struct CurveFormatter {
    /// Number of significant digits for sampled values
    pub precision: usize,
}

impl Default for CurveFormatter {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl CurveFormatter {
    /// Create a formatter with the default precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with a specific precision.
    pub fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// Format a curve in the requested output format.
    pub fn format(&self, curve: &SweepCurve, format: OutputFormat) -> Result<String, String> {
        match format {
            OutputFormat::Text => Ok(self.format_text(curve)),
            OutputFormat::Csv => Ok(self.format_csv(curve)),
            OutputFormat::Json => serde_json::to_string_pretty(curve)
                .map_err(|e| format!("JSON serialization failed: {e}")),
        }
    }

    fn format_text(&self, curve: &SweepCurve) -> String {
        let (x_label, y_label) = curve.quantity.axis_labels();
        let mut out = String::new();
        out.push_str(&format!(
            "{} [{:?}, {:?}/{:?}]\n",
            curve.label, curve.regime, curve.style.color, curve.style.line
        ));
        out.push_str(&format!("{:>20} {:>20}\n", x_label, y_label));
        for (x, y) in curve.x.iter().zip(curve.y.iter()) {
            out.push_str(&format!(
                "{:>20.prec$e} {:>20.prec$e}\n",
                x,
                y,
                prec = self.precision
            ));
        }
        out
    }

    fn format_csv(&self, curve: &SweepCurve) -> String {
        let (x_label, y_label) = curve.quantity.axis_labels();
        let mut out = format!("{x_label},{y_label}\n");
        for (x, y) in curve.x.iter().zip(curve.y.iter()) {
            out.push_str(&format!("{:.prec$e},{:.prec$e}\n", x, y, prec = self.precision));
        }
        out
    }
}
