//! Basic solar position calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solarpos::{AtmosphericConditions, DeltaT, GeographicPosition, Observation, grena3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Calculate solar position using FixedOffset timezone
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same time using UTC
    // 19:00 UTC = 12:00 PDT
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
    let san_francisco = GeographicPosition::new(37.7749, -122.4194)?;

    // ΔT estimated from the date, standard atmosphere
    let observation = Observation::new(datetime_fixed, san_francisco);
    let position_fixed = observation.solar_position();

    // Same calculation with every input spelled out
    let delta_t = DeltaT::estimate_from_date(2023, 6)?;
    let position_utc = grena3::solar_position(
        datetime_utc,
        san_francisco,
        delta_t,
        AtmosphericConditions::new(1013.25, 15.0),
    );

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  ΔT (estimated): {:.3} s", observation.delta_t());
    println!("Using FixedOffset timezone:");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth());
    println!("  Elevation: {:.3}°", position_fixed.elevation_angle());
    println!("  Zenith angle: {:.3}°", position_fixed.zenith_angle());

    println!("\nUsing UTC timezone (same moment):");
    println!("  Azimuth: {:.3}°", position_utc.azimuth());
    println!("  Elevation: {:.3}°", position_utc.elevation_angle());
    println!("  Zenith angle: {:.3}°", position_utc.zenith_angle());

    println!(
        "\nBoth calculations produce identical results: {}",
        position_fixed == position_utc
    );

    if position_fixed.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
