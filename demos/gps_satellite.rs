use gravity_clock::catalog::BodyCatalog;
use gravity_clock::comparison::Comparator;
use gravity_clock::constants::GPS_ALTITUDE_M;
use gravity_clock::observer::{ObserverInput, ObserverMode};
use gravity_clock::report::ComparisonReport;

/// Why GPS clocks are tuned before launch: a satellite clock at 20,200 km
/// gains on the ground even though its orbital speed slows it down.
fn main() -> Result<(), String> {
    println!("🛰️ GPS relativity check");
    println!("=======================");

    let catalog = BodyCatalog::standard();
    let comparator = Comparator::new(catalog)?;
    let earth = catalog.get_or_err("earth")?;

    let inputs = [
        ObserverInput::Surface,
        ObserverInput::Altitude { altitude_m: GPS_ALTITUDE_M },
        ObserverInput::Orbit { altitude_m: GPS_ALTITUDE_M },
    ];

    for input in inputs {
        let mode = ObserverMode::from_input(earth, input)?;
        let result = comparator.compare(earth, mode);
        println!();
        for line in ComparisonReport::new(earth, &result).colored_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
