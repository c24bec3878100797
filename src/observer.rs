// src/observer.rs - Where the observer sits and how fast it moves

use crate::body::{Body, BodyKind};
use crate::constants::{MIN_HORIZON_MULTIPLIER, PhysicalConstants};
use crate::horizon::schwarzschild_radius;
use crate::kinematics::circular_orbit_speed;
use crate::rate::{FormulaChoice, gravitational_potential, select_formula};
use serde::{Deserialize, Serialize};

/// Observer placement relative to a body.
///
/// `NearHorizon` is only built for black holes by [`ObserverMode::from_input`];
/// every other variant is only built for normal bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ObserverMode {
    AtSurface,
    StaticAtAltitude { altitude_m: f64 },
    CircularOrbit { altitude_m: f64 },
    NearHorizon { multiplier: f64 },
}

/// Unchecked observer request, as it comes from a UI or a JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum ObserverInput {
    Surface,
    Altitude { altitude_m: f64 },
    Orbit { altitude_m: f64 },
    Horizon { multiplier: f64 },
}

/// Multipliers at or below 1 would put the observer on or inside the horizon.
pub fn clamp_horizon_multiplier(multiplier: f64) -> f64 {
    if multiplier <= 1.0 { MIN_HORIZON_MULTIPLIER } else { multiplier }
}

fn check_altitude(body: &Body, altitude_m: f64) -> Result<f64, String> {
    if altitude_m.is_finite() && altitude_m >= 0.0 {
        Ok(altitude_m)
    } else {
        Err(format!("Altitude above '{}' must be finite and non-negative, got {}", body.id, altitude_m))
    }
}

impl ObserverMode {
    /// Validate a raw request against the body it targets.
    pub fn from_input(body: &Body, input: ObserverInput) -> Result<ObserverMode, String> {
        match (body.kind, input) {
            (BodyKind::BlackHole, ObserverInput::Horizon { multiplier }) => {
                if multiplier.is_nan() {
                    return Err(format!("Horizon multiplier for '{}' is not a number", body.id));
                }
                Ok(ObserverMode::NearHorizon {
                    multiplier: clamp_horizon_multiplier(multiplier),
                })
            }
            (BodyKind::BlackHole, other) => Err(format!(
                "'{}' is a black hole; only a static horizon-multiplier observer is supported, got {:?}",
                body.id, other
            )),
            (BodyKind::Normal, ObserverInput::Horizon { .. }) => Err(format!(
                "'{}' is not a black hole; horizon multipliers are not available",
                body.id
            )),
            (BodyKind::Normal, ObserverInput::Surface) => Ok(ObserverMode::AtSurface),
            (BodyKind::Normal, ObserverInput::Altitude { altitude_m }) => Ok(ObserverMode::StaticAtAltitude {
                altitude_m: check_altitude(body, altitude_m)?,
            }),
            (BodyKind::Normal, ObserverInput::Orbit { altitude_m }) => Ok(ObserverMode::CircularOrbit {
                altitude_m: check_altitude(body, altitude_m)?,
            }),
        }
    }

    pub fn label(&self) -> String {
        match self {
            ObserverMode::AtSurface => "at rest on the surface".to_string(),
            ObserverMode::StaticAtAltitude { altitude_m } => format!("at rest {:.0} km up", altitude_m / 1000.0),
            ObserverMode::CircularOrbit { altitude_m } => format!("circular orbit {:.0} km up", altitude_m / 1000.0),
            ObserverMode::NearHorizon { multiplier } => format!("static at {} Rs", multiplier),
        }
    }
}

/// Resolved observer: distance from the body's center, tangential speed and
/// the formula its rate is evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObserverState {
    pub radius_m: f64,
    pub speed_m_per_s: f64,
    pub formula: FormulaChoice,
    /// Newtonian potential at `radius_m` (J/kg)
    pub potential: f64,
    /// Rs / r; at or above 1 the observer is on or inside the horizon
    pub horizon_ratio: f64,
}

impl ObserverState {
    pub fn resolve(
        constants: &PhysicalConstants,
        body: &Body,
        mode: ObserverMode,
        requested_exact: bool,
    ) -> ObserverState {
        let rs = schwarzschild_radius(constants, body.mass_kg);

        let radius_m = match mode {
            ObserverMode::AtSurface => body.radius_m,
            ObserverMode::StaticAtAltitude { altitude_m } | ObserverMode::CircularOrbit { altitude_m } => {
                body.radius_m + altitude_m
            }
            ObserverMode::NearHorizon { multiplier } => rs * clamp_horizon_multiplier(multiplier),
        };

        // black holes only support static observers
        let speed_m_per_s = match (mode, body.kind) {
            (ObserverMode::CircularOrbit { .. }, BodyKind::Normal) => {
                circular_orbit_speed(constants, body.mass_kg, radius_m)
            }
            _ => 0.0,
        };

        ObserverState {
            radius_m,
            speed_m_per_s,
            formula: select_formula(body.kind, requested_exact, speed_m_per_s),
            potential: gravitational_potential(constants, body.mass_kg, radius_m),
            horizon_ratio: rs / radius_m,
        }
    }

    /// Local proper-time rate relative to a distant static observer.
    pub fn rate(&self, constants: &PhysicalConstants, body: &Body) -> f64 {
        self.formula.rate(constants, body.mass_kg, self.radius_m, self.speed_m_per_s)
    }
}
