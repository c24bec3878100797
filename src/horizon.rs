//! Event-horizon geometry for non-rotating masses.

use crate::constants::PhysicalConstants;

/// Schwarzschild radius `Rs = 2GM / c²` in meters.
///
/// # Examples
/// ```
/// use gravity_clock::constants::{PhysicalConstants, SOLAR_MASS_KG};
/// use gravity_clock::horizon::schwarzschild_radius;
///
/// // about 2.95 km for one solar mass
/// let rs = schwarzschild_radius(&PhysicalConstants::STANDARD, SOLAR_MASS_KG);
/// assert!((rs - 2953.0).abs() < 1.0);
/// ```
pub fn schwarzschild_radius(constants: &PhysicalConstants, mass_kg: f64) -> f64 {
    2.0 * constants.g * mass_kg / constants.c_squared()
}

/// Distance `r` expressed as a multiple of the Schwarzschild radius.
/// Infinite when the mass is zero.
pub fn horizon_multiplier(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    let rs = schwarzschild_radius(constants, mass_kg);
    if rs > 0.0 { radius_m / rs } else { f64::INFINITY }
}
