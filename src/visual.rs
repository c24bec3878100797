//! Values handed to the spacetime renderer.
//!
//! The renderer only ever sees mass, an effective radius and the hue shift.
//! For black holes the radius is the resolved observer distance, not the
//! catalog's display radius.

use crate::body::Body;
use crate::comparison::ComparisonResult;
use crate::constants::{LENSING_LOG_MAX, LENSING_LOG_MIN, PhysicalConstants};
use crate::horizon::schwarzschild_radius;
use crate::math_utils::{clamp, remap};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualInputs {
    pub mass_kg: f64,
    pub radius_m: f64,
    pub hue_shift: f64,
}

impl VisualInputs {
    pub fn from_result(result: &ComparisonResult, body: &Body) -> VisualInputs {
        let radius_m = if body.is_black_hole() {
            result.observer.radius_m
        } else {
            body.radius_m
        };

        VisualInputs {
            mass_kg: body.mass_kg,
            radius_m,
            hue_shift: result.hue_shift,
        }
    }

    pub fn lensing_strength(&self, constants: &PhysicalConstants) -> f64 {
        lensing_strength(constants, self.mass_kg, self.radius_m)
    }
}

/// Maps `log10(Rs / r)` from [-9.5, -5.0] onto [0, 1]. Earth sits near the
/// bottom of the range, compact stars saturate it.
pub fn lensing_strength(constants: &PhysicalConstants, mass_kg: f64, radius_m: f64) -> f64 {
    if mass_kg <= 0.0 || radius_m <= 0.0 {
        return 0.0;
    }
    let compactness = schwarzschild_radius(constants, mass_kg) / radius_m;
    let t = remap(compactness.log10(), LENSING_LOG_MIN, LENSING_LOG_MAX, 0.0, 1.0);
    clamp(t, 0.0, 1.0)
}
