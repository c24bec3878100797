use serde::{Deserialize, Serialize};

// Physical constants (SI)
pub const G_SI: f64 = 6.674_30e-11; // m³ kg⁻¹ s⁻²
pub const C_SI: f64 = 299_792_458.0; // m/s
pub const SOLAR_MASS_KG: f64 = 1.988_47e30;
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

// Reference body
pub const EARTH_ID: &str = "earth";
pub const EARTH_MASS_KG: f64 = 5.972e24;
pub const EARTH_RADIUS_M: f64 = 6.371e6;

// Time conversions
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

// Observers closer than this multiple of Rs sit on or inside the horizon
pub const MIN_HORIZON_MULTIPLIER: f64 = 1.0001;

// Hue shift compression: magnitude = min(1, sqrt(|R - 1|) * HUE_SHIFT_GAIN)
pub const HUE_SHIFT_GAIN: f64 = 2.0e4;

// log10(Rs / r) range mapped onto lensing strength [0, 1]
pub const LENSING_LOG_MIN: f64 = -9.5;
pub const LENSING_LOG_MAX: f64 = -5.0;

// GPS constellation altitude above the surface
pub const GPS_ALTITUDE_M: f64 = 20_200_000.0;

/// The constants every physics function reads. Held by the catalog and passed
/// explicitly so tests can swap in synthetic values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Gravitational constant (m³ kg⁻¹ s⁻²)
    pub g: f64,
    /// Speed of light (m/s)
    pub c: f64,
    /// Reference mass, only used to parameterize catalog entries
    pub solar_mass_kg: f64,
    /// Reference radius, only used to parameterize catalog entries
    pub solar_radius_m: f64,
}

impl PhysicalConstants {
    pub const STANDARD: PhysicalConstants = PhysicalConstants {
        g: G_SI,
        c: C_SI,
        solar_mass_kg: SOLAR_MASS_KG,
        solar_radius_m: SOLAR_RADIUS_M,
    };

    pub fn c_squared(&self) -> f64 {
        self.c * self.c
    }

    /// Gravitational parameter μ = G·M (m³/s²)
    pub fn mu(&self, mass_kg: f64) -> f64 {
        self.g * mass_kg
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
