//! sol: print the sun's azimuth and zenith angle for a place and time.
//!
//! ```text
//! sol --lat 52.521667 --lon 13.413333 --date 2015-06-23T10:30:12Z --delta-t 65
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;
use solarpos::units::{
    STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C, fahrenheit_to_celsius,
    inches_of_mercury_to_hectopascals,
};
use solarpos::{AtmosphericConditions, GeographicPosition, Observation};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Topocentric sun position (Grena algorithm no. 3)
#[derive(Parser, Debug)]
#[command(name = "sol")]
#[command(version)]
struct Args {
    /// Observer latitude in degrees (-90 to +90)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Observer longitude in degrees (-180 to +180)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Instant as RFC 3339 timestamp (default: now)
    #[arg(long)]
    date: Option<String>,

    /// ΔT in seconds (default: estimated from the date)
    #[arg(long = "delta-t", allow_hyphen_values = true)]
    delta_t: Option<f64>,

    /// Barometric pressure in hectopascals
    #[arg(long, allow_hyphen_values = true, conflicts_with = "pressure_inhg")]
    pressure_hpa: Option<f64>,

    /// Barometric pressure in inches of mercury
    #[arg(long, allow_hyphen_values = true)]
    pressure_inhg: Option<f64>,

    /// Temperature in degrees Celsius
    #[arg(long, allow_hyphen_values = true, conflicts_with = "temperature_f")]
    temperature_c: Option<f64>,

    /// Temperature in degrees Fahrenheit
    #[arg(long, allow_hyphen_values = true)]
    temperature_f: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolves the flags into one validated observation, filling in defaults.
    fn observation(&self, now: DateTime<Utc>) -> Result<Observation> {
        let position = GeographicPosition::new(self.lat, self.lon)?;

        let instant = match &self.date {
            Some(date) => parse_instant(date)?,
            None => {
                info!(%now, "using current time");
                now.fixed_offset()
            }
        };

        let observation = Observation::new(instant, position).with_atmosphere(self.atmosphere());
        match self.delta_t {
            Some(delta_t) => Ok(observation.with_delta_t(delta_t)),
            None => {
                info!(delta_t = observation.delta_t(), "estimating delta-T");
                Ok(observation)
            }
        }
    }

    fn atmosphere(&self) -> AtmosphericConditions {
        let pressure = match (self.pressure_inhg, self.pressure_hpa) {
            (Some(inches), _) => inches_of_mercury_to_hectopascals(inches),
            (None, Some(hectopascals)) => hectopascals,
            (None, None) => {
                info!(
                    pressure_hpa = STANDARD_PRESSURE_HPA,
                    "using standard sea-level pressure"
                );
                STANDARD_PRESSURE_HPA
            }
        };

        let temperature = match (self.temperature_f, self.temperature_c) {
            (Some(fahrenheit), _) => fahrenheit_to_celsius(fahrenheit),
            (None, Some(celsius)) => celsius,
            (None, None) => {
                info!(
                    temperature_c = STANDARD_TEMPERATURE_C,
                    "using standard sea-level temperature"
                );
                STANDARD_TEMPERATURE_C
            }
        };

        AtmosphericConditions::new(pressure, temperature)
    }
}

fn parse_instant(date: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date).with_context(|| format!("failed to parse date '{date}'"))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let observation = args.observation(Utc::now())?;
    debug!(?observation, "resolved observation");

    let position = observation.solar_position();
    println!(
        "azimuth: {:.6}   zenith: {:.6}",
        position.azimuth(),
        position.zenith_angle()
    );

    Ok(())
}
