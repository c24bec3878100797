use crate::constants::PhysicalConstants;
use std::f64::consts::PI;

/// Newtonian circular-orbit speed `sqrt(GM / r)` (m/s). `r` must be positive.
pub fn circular_orbit_speed(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    (constants.mu(mass_kg) / radius_m).sqrt()
}

/// Period of a circular orbit at `radius_m`, in seconds.
pub fn orbital_period(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    2.0 * PI * radius_m / circular_orbit_speed(constants, mass_kg, radius_m)
}
