//! Comparison of an observer's clock against a clock at rest on Earth's surface.
//!
//! Everything derived here flows from the single ratio `R = f_body / f_earth`.
//! Horizon and division edge cases produce `0.0` and `f64::INFINITY` rather
//! than errors.

use crate::body::Body;
use crate::catalog::BodyCatalog;
use crate::constants::{HUE_SHIFT_GAIN, PhysicalConstants, SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::observer::{ObserverMode, ObserverState};
use crate::rate::FormulaChoice;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompareOptions {
    /// Use the exact Schwarzschild formula for static observers around
    /// normal bodies. Black holes always use it.
    pub exact_strong_field: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub body_id: String,
    pub mode: ObserverMode,
    pub observer: ObserverState,
    pub f_body: f64,
    pub f_earth: f64,
    /// R = f_body / f_earth
    pub ratio: f64,
    /// Seconds gained (positive) or lost per Earth day
    pub per_day_seconds: f64,
    /// Body seconds elapsed during one Earth second
    pub earth_second_in_body: f64,
    /// Earth seconds elapsed during one body second; infinite when R = 0
    pub body_second_in_earth: f64,
    /// Body seconds elapsed during one Earth hour
    pub earth_hour_in_body: f64,
    /// Earth seconds elapsed during one body hour; infinite when R = 0
    pub body_hour_in_earth: f64,
    /// Signed visual shift in [-1, 1]
    pub hue_shift: f64,
}

impl ComparisonResult {
    /// Observer sits on or inside the event horizon.
    pub fn is_frozen(&self) -> bool {
        self.ratio == 0.0
    }

    /// Microseconds gained or lost per Earth day.
    pub fn per_day_microseconds(&self) -> f64 {
        self.per_day_seconds * 1.0e6
    }
}

/// Compresses `R - 1` into a perceptible color shift.
pub fn hue_shift(ratio: f64) -> f64 {
    let delta = ratio - 1.0;
    let magnitude = (delta.abs().sqrt() * HUE_SHIFT_GAIN).min(1.0);
    if delta < 0.0 { -magnitude } else { magnitude }
}

/// `1 / ratio`, or positive infinity for a zero ratio.
fn inverse_or_infinite(ratio: f64) -> f64 {
    if ratio == 0.0 { f64::INFINITY } else { 1.0 / ratio }
}

/// Runs comparisons against a catalog's Earth entry. The reference rate is
/// evaluated once, at construction.
#[derive(Debug, Clone)]
pub struct Comparator<'a> {
    catalog: &'a BodyCatalog,
    f_earth: f64,
}

impl<'a> Comparator<'a> {
    pub fn new(catalog: &'a BodyCatalog) -> Result<Comparator<'a>, String> {
        let earth = catalog
            .earth()
            .ok_or_else(|| "Catalog has no 'earth' entry to compare against".to_string())?;

        // the reference is always weak field, never the strong-field branch
        let state = ObserverState::resolve(catalog.constants(), earth, ObserverMode::AtSurface, false);
        let f_earth = FormulaChoice::WeakField.rate(catalog.constants(), earth.mass_kg, state.radius_m, 0.0);

        Ok(Comparator { catalog, f_earth })
    }

    pub fn catalog(&self) -> &BodyCatalog {
        self.catalog
    }

    pub fn constants(&self) -> &PhysicalConstants {
        self.catalog.constants()
    }

    pub fn earth_rate(&self) -> f64 {
        self.f_earth
    }

    pub fn compare(&self, body: &Body, mode: ObserverMode) -> ComparisonResult {
        self.compare_with(body, mode, CompareOptions::default())
    }

    pub fn compare_with(&self, body: &Body, mode: ObserverMode, options: CompareOptions) -> ComparisonResult {
        let constants = self.constants();
        let observer = ObserverState::resolve(constants, body, mode, options.exact_strong_field);
        let f_body = observer.rate(constants, body);
        let ratio = f_body / self.f_earth;

        ComparisonResult {
            body_id: body.id.clone(),
            mode,
            observer,
            f_body,
            f_earth: self.f_earth,
            ratio,
            per_day_seconds: (ratio - 1.0) * SECONDS_PER_DAY,
            earth_second_in_body: ratio,
            body_second_in_earth: inverse_or_infinite(ratio),
            earth_hour_in_body: ratio * SECONDS_PER_HOUR,
            body_hour_in_earth: inverse_or_infinite(ratio) * SECONDS_PER_HOUR,
            hue_shift: hue_shift(ratio),
        }
    }

    /// Look the body up by id, then compare.
    pub fn compare_id(&self, body_id: &str, mode: ObserverMode) -> Result<ComparisonResult, String> {
        let body = self.catalog.get_or_err(body_id)?;
        Ok(self.compare(body, mode))
    }
}
