use colored::Colorize;
use gravity_clock::catalog::BodyCatalog;
use gravity_clock::comparison::Comparator;
use gravity_clock::observer::{ObserverInput, ObserverMode};
use gravity_clock::report::{ComparisonReport, format_seconds};
use gravity_clock::visual::VisualInputs;

/// Lowers a static observer toward each black hole in the standard catalog
/// and prints how much an Earth hour stretches at each stop.
fn main() -> Result<(), String> {
    println!("🕳️ Approaching the horizon");
    println!("==========================");

    let catalog = BodyCatalog::standard();
    let comparator = Comparator::new(catalog)?;
    let multipliers = [100.0, 10.0, 3.0, 1.5, 1.1, 1.01, 1.0001, 1.0];

    for hole in catalog.list_bodies().iter().filter(|b| b.is_black_hole()) {
        println!("\n{}", hole.name.bold());
        println!("  {:>10} {:>22} {:>10} {:>8}", "r / Rs", "1 body h on Earth", "hue", "lens");

        for multiplier in multipliers {
            let mode = ObserverMode::from_input(hole, ObserverInput::Horizon { multiplier })?;
            let result = comparator.compare(hole, mode);
            let visual = VisualInputs::from_result(&result, hole);

            println!(
                "  {:>10} {:>22} {:>10.4} {:>8.3}",
                multiplier,
                format_seconds(result.body_hour_in_earth),
                result.hue_shift,
                visual.lensing_strength(comparator.constants()),
            );
        }

        let closest = comparator.compare(hole, ObserverMode::NearHorizon { multiplier: 1.0001 });
        println!();
        print!("{}", ComparisonReport::new(hole, &closest));
    }

    Ok(())
}
