//! Piston flow derivation

/// Volumetric flow displaced by the piston for a given screw rotation rate.
///
/// `u = omega * lead / 2 * r_piston^2`, where `lead` is the linear piston
/// displacement per full screw revolution. Pure; performs no validation, so
/// a negative or zero input yields a mathematically valid but physically
/// meaningless flow rather than an error.
pub fn derive_flow(omega: f64, lead: f64, piston_radius: f64) -> f64 {
    omega * lead / 2.0 * piston_radius.powi(2)
}
