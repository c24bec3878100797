use crate::body::{Body, BodyKind};
use crate::constants::{EARTH_ID, EARTH_MASS_KG, EARTH_RADIUS_M, PhysicalConstants};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Read-only set of bodies plus the constants they were defined against.
/// Order is declaration order and is stable across calls.
#[derive(Debug, Clone)]
pub struct BodyCatalog {
    constants: PhysicalConstants,
    bodies: Vec<Body>,
}

/// The built-in catalog, constructed on first use.
pub static STANDARD_CATALOG: Lazy<BodyCatalog> = Lazy::new(|| {
    let k = PhysicalConstants::STANDARD;
    let m_sun = k.solar_mass_kg;
    let r_sun = k.solar_radius_m;

    BodyCatalog {
        constants: k,
        bodies: vec![
            Body::new(EARTH_ID, "Earth", EARTH_MASS_KG, EARTH_RADIUS_M),
            Body::new("moon", "Moon", 7.342e22, 1.7374e6),
            Body::new("mars", "Mars", 6.4171e23, 3.3895e6),
            Body::new("jupiter", "Jupiter", 1.898e27, 6.9911e7),
            Body::new("sun", "Sun", m_sun, r_sun),
            Body::new("sirius-b", "Sirius B (white dwarf)", 1.018 * m_sun, 0.0084 * r_sun),
            Body::new("neutron-star", "Neutron star", 1.4 * m_sun, 1.2e4),
            // display radii for black holes are only used when drawing
            Body::black_hole("stellar-black-hole", "Stellar black hole", 10.0 * m_sun, 3.0e4),
            Body::black_hole("sgr-a-star", "Sagittarius A*", 4.3e6 * m_sun, 1.27e10),
        ],
    }
});

impl BodyCatalog {
    /// Build a catalog from explicit bodies. Ids must be unique and every body
    /// needs a positive finite mass and radius.
    pub fn new(constants: PhysicalConstants, bodies: Vec<Body>) -> Result<BodyCatalog, String> {
        if !(constants.g > 0.0 && constants.c > 0.0) {
            return Err(format!("Constants must be positive: G={}, c={}", constants.g, constants.c));
        }

        let mut seen = HashSet::new();
        for body in &bodies {
            body.validate()?;
            if !seen.insert(body.id.as_str()) {
                return Err(format!("Duplicate body id '{}'", body.id));
            }
        }

        Ok(BodyCatalog { constants, bodies })
    }

    pub fn standard() -> &'static BodyCatalog {
        &STANDARD_CATALOG
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn list_bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_or_err(&self, id: &str) -> Result<&Body, String> {
        self.get(id).ok_or_else(|| format!("Unknown body id '{}'", id))
    }

    /// The reference body every comparison is made against.
    pub fn earth(&self) -> Option<&Body> {
        self.get(EARTH_ID)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json_str: &str) -> Result<BodyCatalog, String> {
        let file: CatalogFile =
            serde_json::from_str(json_str).map_err(|e| format!("Failed to parse catalog JSON: {}", e))?;

        let constants = file.constants.unwrap_or_default();
        let bodies = file
            .bodies
            .into_iter()
            .map(|record| record.into_body(&constants))
            .collect::<Result<Vec<_>, _>>()?;

        BodyCatalog::new(constants, bodies)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_json<P: AsRef<Path>>(file_path: P) -> Result<BodyCatalog, String> {
        let path = file_path.as_ref();
        let json_str = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read file {}: {}", path.display(), e))?;
        Self::from_json_str(&json_str)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    constants: Option<PhysicalConstants>,
    bodies: Vec<BodyRecord>,
}

/// On-disk body entry; mass and radius may be given in SI or solar units.
#[derive(Debug, Deserialize)]
struct BodyRecord {
    id: String,
    name: String,
    mass_kg: Option<f64>,
    mass_solar: Option<f64>,
    radius_m: Option<f64>,
    radius_solar: Option<f64>,
    #[serde(default)]
    kind: BodyKind,
}

impl BodyRecord {
    fn into_body(self, constants: &PhysicalConstants) -> Result<Body, String> {
        let mass_kg = match (self.mass_kg, self.mass_solar) {
            (Some(kg), None) => kg,
            (None, Some(solar)) => solar * constants.solar_mass_kg,
            _ => return Err(format!("Body '{}' needs exactly one of mass_kg or mass_solar", self.id)),
        };
        let radius_m = match (self.radius_m, self.radius_solar) {
            (Some(m), None) => m,
            (None, Some(solar)) => solar * constants.solar_radius_m,
            _ => return Err(format!("Body '{}' needs exactly one of radius_m or radius_solar", self.id)),
        };

        Ok(Body {
            id: self.id,
            name: self.name,
            mass_kg,
            radius_m,
            kind: self.kind,
        })
    }
}
