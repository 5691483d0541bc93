//! Demo driver: runs the default ENSTA comparison sweep and prints the
//! resulting curves as text summaries and CSV.

use float_kinematics::{
    CurveFormatter, FloatParameters, OutputFormat, SweepConfig, SweepDriver, OMEGA_MAX,
};

/// Parameter set for the inverse-curve panels: the heaviest added mass at
/// the fastest rotation rate, the last point of the comparison sweep.
fn inverse_demo_parameters() -> FloatParameters {
    FloatParameters::default()
        .with_added_mass(3.0)
        .with_rotation_rate(OMEGA_MAX)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SweepConfig::default();
    let validation = config.validate();
    for warning in &validation.warnings {
        eprintln!("warning: {warning}");
    }
    if !validation.is_valid {
        for error in &validation.errors {
            eprintln!("error: {error}");
        }
        return Err("invalid sweep configuration".into());
    }

    let driver = SweepDriver::new(config);
    let formatter = CurveFormatter::with_precision(4);

    println!("=== Float depth over time ===");
    for curve in driver.position_sweep()? {
        let final_depth = curve.y[curve.y.len() - 1];
        println!(
            "{:<40} {:?} regime, depth after {:.0} s: {:.3} m",
            curve.label,
            curve.regime,
            curve.x[curve.x.len() - 1],
            final_depth
        );
    }

    println!();
    println!("=== Float speed over time ===");
    for curve in driver.velocity_sweep()? {
        let final_speed = curve.y[curve.y.len() - 1];
        println!(
            "{:<40} {:?} regime, speed after {:.0} s: {:.4} m/s",
            curve.label,
            curve.regime,
            curve.x[curve.x.len() - 1],
            final_speed
        );
    }

    // The inverse curves use one explicit parameter set rather than
    // whatever the sweep last touched
    let params = inverse_demo_parameters();

    println!();
    println!("=== Time to reach a target speed (a = {}) ===", params.added_mass);
    let time_curve = driver.time_to_velocity_curve(&params)?;
    println!("{}", formatter.format(&time_curve, OutputFormat::Csv)?);

    println!("=== Depth to reach a target speed (a = {}) ===", params.added_mass);
    let depth_curve = driver.depth_to_velocity_curve(&params)?;
    println!("{}", formatter.format(&depth_curve, OutputFormat::Csv)?);

    Ok(())
}
