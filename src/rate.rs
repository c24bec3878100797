//! Proper-time rate functions.
//!
//! A rate `f` is the observer's elapsed proper time per unit coordinate time of
//! a distant static observer. `f = 1` means no dilation.

use crate::body::BodyKind;
use crate::constants::PhysicalConstants;
use serde::Serialize;

/// Newtonian potential `Φ = -GM / r` (J/kg). `r` must be positive.
pub fn gravitational_potential(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    -constants.g * mass_kg / radius_m
}

/// First-order post-Newtonian rate `1 + Φ/c² - v²/(2c²)`.
///
/// Only meaningful for `|Φ|/c² ≪ 1` and `v ≪ c`; no check is made here.
pub fn weak_field_rate(constants: &PhysicalConstants, potential: f64, speed_m_per_s: f64) -> f64 {
    let c2 = constants.c_squared();
    1.0 + potential / c2 - speed_m_per_s * speed_m_per_s / (2.0 * c2)
}

/// Exact rate `sqrt(1 - Rs/r)` for a static observer in Schwarzschild geometry.
///
/// At or inside the horizon the rate is exactly `0.0`. Never use this for a
/// moving observer.
pub fn schwarzschild_static_rate(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    let x = 2.0 * constants.g * mass_kg / (radius_m * constants.c_squared());
    if x >= 1.0 {
        return 0.0;
    }
    (1.0 - x).sqrt()
}

/// Which rate formula an observer state is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormulaChoice {
    WeakField,
    ExactStatic,
}

/// Black holes always get the exact static formula. Other bodies get it only
/// when explicitly requested and the observer is not moving.
pub fn select_formula(kind: BodyKind, requested_exact: bool, speed_m_per_s: f64) -> FormulaChoice {
    match kind {
        BodyKind::BlackHole => FormulaChoice::ExactStatic,
        BodyKind::Normal if requested_exact && speed_m_per_s == 0.0 => FormulaChoice::ExactStatic,
        BodyKind::Normal => FormulaChoice::WeakField,
    }
}

impl FormulaChoice {
    /// Evaluate the chosen formula at `radius_m` with the given speed.
    pub fn rate(
        self,
        constants: &PhysicalConstants,
        mass_kg: f64,
        radius_m: f64,
        speed_m_per_s: f64,
    ) -> f64 {
        match self {
            FormulaChoice::WeakField => {
                let potential = gravitational_potential(constants, mass_kg, radius_m);
                weak_field_rate(constants, potential, speed_m_per_s)
            }
            FormulaChoice::ExactStatic => schwarzschild_static_rate(constants, mass_kg, radius_m),
        }
    }
}
