//! Unit conversions and standard defaults for atmospheric inputs.

/// Standard sea-level pressure in hectopascals.
pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Standard sea-level temperature in degrees Celsius.
pub const STANDARD_TEMPERATURE_C: f64 = 15.0;

/// Hectopascals per inch of mercury (at 0 °C).
pub const HPA_PER_INHG: f64 = 33.8639;

/// Converts a barometric pressure from inches of mercury to hectopascals.
///
/// # Example
/// ```
/// # use solarpos::units::inches_of_mercury_to_hectopascals;
/// assert!((inches_of_mercury_to_hectopascals(29.92) - 1013.21).abs() < 0.01);
/// ```
#[must_use]
pub fn inches_of_mercury_to_hectopascals(inches: f64) -> f64 {
    inches * HPA_PER_INHG
}

/// Converts a temperature from degrees Fahrenheit to degrees Celsius.
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
