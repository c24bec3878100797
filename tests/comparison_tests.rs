// End-to-end comparisons the way a UI drives them: pick a body, build the
// observer mode from raw input, compare against Earth.

use approx::assert_abs_diff_eq;
use gravity_clock::assert_deviation;
use gravity_clock::catalog::BodyCatalog;
use gravity_clock::comparison::{CompareOptions, Comparator};
use gravity_clock::constants::GPS_ALTITUDE_M;
use gravity_clock::observer::{ObserverInput, ObserverMode};
use gravity_clock::rate::{FormulaChoice, gravitational_potential, weak_field_rate};
use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};

fn comparator() -> Comparator<'static> {
    Comparator::new(BodyCatalog::standard()).unwrap()
}

#[test]
fn test_earth_surface_against_itself() {
    println!("🌍 Earth surface compared with Earth surface");
    let comparator = comparator();
    let earth = comparator.catalog().earth().unwrap();

    let result = comparator.compare(earth, ObserverMode::AtSurface);

    println!("   f_earth = {:.15}", result.f_earth);
    assert_eq!(result.ratio, 1.0);
    assert_eq!(result.per_day_seconds, 0.0);
    assert_eq!(result.hue_shift, 0.0);
    assert_eq!(result.body_second_in_earth, 1.0);
    assert_eq!(result.earth_hour_in_body, 3600.0);
    assert_lt!(result.f_earth, 1.0);
}

#[test]
fn test_gps_satellite_gains_time() {
    println!("🛰️ GPS satellite in circular orbit at 20,200 km");
    let comparator = comparator();
    let earth = comparator.catalog().earth().unwrap();

    let mode = ObserverMode::from_input(earth, ObserverInput::Orbit { altitude_m: GPS_ALTITUDE_M }).unwrap();
    let result = comparator.compare(earth, mode);

    println!("   speed: {:.1} m/s", result.observer.speed_m_per_s);
    println!("   drift: {:.2} µs/day", result.per_day_microseconds());

    assert_gt!(result.ratio, 1.0);
    assert_gt!(result.hue_shift, 0.0);
    assert_eq!(result.observer.formula, FormulaChoice::WeakField);
    // altitude gain (~45.7 µs) minus orbital speed loss (~7.2 µs)
    assert_deviation!(result.per_day_microseconds(), 38.5, 1.0);
}

#[test]
fn test_gps_components() {
    println!("🛰️ Splitting the GPS drift into altitude and speed parts");
    let comparator = comparator();
    let earth = comparator.catalog().earth().unwrap();

    let resting = comparator.compare(earth, ObserverMode::StaticAtAltitude { altitude_m: GPS_ALTITUDE_M });
    let orbiting = comparator.compare(earth, ObserverMode::CircularOrbit { altitude_m: GPS_ALTITUDE_M });

    println!("   at rest: {:.2} µs/day", resting.per_day_microseconds());
    println!("   orbit:   {:.2} µs/day", orbiting.per_day_microseconds());

    assert_deviation!(resting.per_day_microseconds(), 45.7, 1.0);
    assert_deviation!(resting.per_day_microseconds() - orbiting.per_day_microseconds(), 7.2, 1.0);
}

#[test]
fn test_moon_and_sun_surfaces() {
    println!("🌙 Moon surface runs fast, ☀️ Sun surface runs slow");
    let comparator = comparator();
    let catalog = comparator.catalog();

    let moon = comparator.compare(catalog.get("moon").unwrap(), ObserverMode::AtSurface);
    let sun = comparator.compare(catalog.get("sun").unwrap(), ObserverMode::AtSurface);

    println!("   moon: {:.2} µs/day", moon.per_day_microseconds());
    println!("   sun:  {:.4} s/day", sun.per_day_seconds);

    assert_gt!(moon.ratio, 1.0);
    assert_lt!(sun.ratio, 1.0);
    assert_deviation!(sun.per_day_seconds, -0.1834, 1.0);
    assert_eq!(sun.hue_shift, -1.0);
}

#[test]
fn test_black_hole_near_horizon() {
    println!("🕳️ Static observer just outside a stellar black hole's horizon");
    let comparator = comparator();
    let hole = comparator.catalog().get("stellar-black-hole").unwrap();

    let mode = ObserverMode::from_input(hole, ObserverInput::Horizon { multiplier: 0.5 }).unwrap();
    assert_eq!(mode, ObserverMode::NearHorizon { multiplier: 1.0001 });

    let result = comparator.compare(hole, mode);
    println!("   R = {:.6}", result.ratio);

    assert_eq!(result.observer.formula, FormulaChoice::ExactStatic);
    assert_eq!(result.observer.speed_m_per_s, 0.0);
    assert_gt!(result.ratio, 0.0);
    assert_lt!(result.ratio, 0.011);
    assert_eq!(result.hue_shift, -1.0);
    assert!(result.body_second_in_earth.is_finite());
}

#[test]
fn test_black_hole_rate_increases_with_distance() {
    println!("🕳️ Rate climbs monotonically as the observer backs away");
    let comparator = comparator();
    let hole = comparator.catalog().get("sgr-a-star").unwrap();

    let multipliers = [1.0001, 1.001, 1.01, 1.1, 1.5, 2.0, 5.0, 10.0, 100.0, 1.0e4, 1.0e6];
    let results: Vec<_> = multipliers
        .iter()
        .map(|&m| comparator.compare(hole, ObserverMode::NearHorizon { multiplier: m }))
        .collect();

    for pair in results.windows(2) {
        assert_gt!(pair[1].f_body, pair[0].f_body);
    }
    for result in &results {
        assert_ge!(result.hue_shift, -1.0);
        assert_le!(result.hue_shift, 1.0);
    }

    // far out the exact and weak-field rates agree
    let far = results.last().unwrap();
    let k = comparator.constants();
    let weak = weak_field_rate(k, gravitational_potential(k, hole.mass_kg, far.observer.radius_m), 0.0);
    assert_abs_diff_eq!(far.f_body, weak, epsilon = 1e-12);
}

#[test]
fn test_inverse_conversions_round_trip() {
    println!("🔁 body→Earth conversions are the inverse of Earth→body");
    let comparator = comparator();

    for body in comparator.catalog().list_bodies() {
        let mode = if body.is_black_hole() {
            ObserverMode::NearHorizon { multiplier: 3.0 }
        } else {
            ObserverMode::StaticAtAltitude { altitude_m: 1.0e6 }
        };
        let result = comparator.compare(body, mode);

        assert_ne!(result.ratio, 0.0, "{} should be outside the horizon", body.id);
        assert_eq!(result.body_second_in_earth, 1.0 / result.earth_second_in_body);
        assert_abs_diff_eq!(result.body_hour_in_earth, 3600.0 / result.ratio, epsilon = 1e-9);
        assert_abs_diff_eq!(result.per_day_seconds, (result.ratio - 1.0) * 86_400.0);
    }
}

#[test]
fn test_exact_formula_only_when_requested() {
    println!("⚖️ Exact strong-field formula is opt-in for normal bodies");
    let comparator = comparator();
    let neutron = comparator.catalog().get("neutron-star").unwrap();
    let exact = CompareOptions { exact_strong_field: true };

    let weak = comparator.compare(neutron, ObserverMode::AtSurface);
    let strong = comparator.compare_with(neutron, ObserverMode::AtSurface, exact);
    let orbit = comparator.compare_with(neutron, ObserverMode::CircularOrbit { altitude_m: 1.0e3 }, exact);

    println!("   weak-field R: {:.6}, exact R: {:.6}", weak.ratio, strong.ratio);

    assert_eq!(weak.observer.formula, FormulaChoice::WeakField);
    assert_eq!(strong.observer.formula, FormulaChoice::ExactStatic);
    assert_eq!(orbit.observer.formula, FormulaChoice::WeakField);
    // at Rs/r ≈ 0.34 the first-order expansion overestimates the rate
    assert_gt!(weak.ratio, strong.ratio);
}

#[test]
fn test_comparisons_are_independent_across_threads() {
    println!("🧵 Comparing every body from several threads at once");
    let comparator = comparator();
    let bodies = comparator.catalog().list_bodies();

    let sequential: Vec<f64> = bodies
        .iter()
        .map(|b| comparator.compare(b, ObserverMode::NearHorizon { multiplier: 2.0 }).ratio)
        .collect();

    let parallel: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = bodies
            .iter()
            .map(|b| {
                let comparator = &comparator;
                scope.spawn(move || comparator.compare(b, ObserverMode::NearHorizon { multiplier: 2.0 }).ratio)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_result_serializes_for_ui() {
    println!("📦 Results serialize to JSON with sentinels as null");
    let comparator = comparator();
    let earth = comparator.catalog().earth().unwrap();

    let result = comparator.compare(earth, ObserverMode::CircularOrbit { altitude_m: 4.0e5 });
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["body_id"], "earth");
    assert_eq!(json["mode"]["mode"], "circular-orbit");
    assert_eq!(json["observer"]["formula"], "weak-field");
    assert_eq!(json["ratio"].as_f64().unwrap(), result.ratio);
}
