// src/body.rs - Celestial bodies and their classification

use serde::{Deserialize, Serialize};

/// Classification that decides which observer modes and rate formula apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyKind {
    #[default]
    Normal,
    BlackHole,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Normal => "normal",
            BodyKind::BlackHole => "black-hole",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(BodyKind::Normal),
            "black-hole" => Some(BodyKind::BlackHole),
            _ => None,
        }
    }
}

/// A gravitating body. For black holes `radius_m` is a display radius only;
/// observers are placed relative to the Schwarzschild radius instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: String,
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub kind: BodyKind,
}

impl Body {
    pub fn new(id: &str, name: &str, mass_kg: f64, radius_m: f64) -> Body {
        Body {
            id: id.to_string(),
            name: name.to_string(),
            mass_kg,
            radius_m,
            kind: BodyKind::Normal,
        }
    }

    pub fn black_hole(id: &str, name: &str, mass_kg: f64, radius_m: f64) -> Body {
        Body {
            kind: BodyKind::BlackHole,
            ..Body::new(id, name, mass_kg, radius_m)
        }
    }

    pub fn is_black_hole(&self) -> bool {
        self.kind == BodyKind::BlackHole
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err(format!("Body '{}' has an empty id", self.name));
        }
        if !(self.mass_kg.is_finite() && self.mass_kg > 0.0) {
            return Err(format!("Body '{}' must have a positive finite mass, got {}", self.id, self.mass_kg));
        }
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return Err(format!("Body '{}' must have a positive finite radius, got {}", self.id, self.radius_m));
        }
        Ok(())
    }
}
