//! Core data types for solar position calculations.

use crate::Result;
use crate::error::check_coordinates;
use crate::units::{STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C};

/// Observer location on the Earth's surface.
///
/// Construction validates the coordinates; the calculation routines assume a valid
/// position and do not check again.
///
/// # Example
/// ```
/// # use solarpos::GeographicPosition;
/// let berlin = GeographicPosition::new(52.521667, 13.413333).unwrap();
/// assert_eq!(berlin.latitude(), 52.521667);
///
/// assert!(GeographicPosition::new(91.0, 0.0).is_err());
/// assert!(GeographicPosition::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicPosition {
    /// Latitude in degrees (-90 to +90, north positive)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, east positive)
    longitude: f64,
}

impl GeographicPosition {
    /// Creates a position from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Atmospheric conditions for refraction correction in solar position calculations.
///
/// Atmospheric refraction bends light rays, causing the apparent sun position to differ
/// from its true geometric position by up to ~0.6° near the horizon.
///
/// Any values are accepted. The correction is only applied for pressure in
/// (0, 3000) hPa and temperature in (-273, 273) °C; outside that domain it is
/// silently omitted rather than rejected.
///
/// # Example
/// ```
/// # use solarpos::AtmosphericConditions;
/// let standard = AtmosphericConditions::standard();
/// assert_eq!(standard.pressure(), 1013.25);
/// assert_eq!(standard.temperature(), 15.0);
///
/// let vacuum = AtmosphericConditions::new(0.0, 15.0);
/// assert!(!vacuum.is_refraction_applicable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    /// Atmospheric pressure in hectopascals (millibars)
    pressure: f64,
    /// Temperature in degrees Celsius
    temperature: f64,
}

impl AtmosphericConditions {
    /// Creates atmospheric conditions from pressure (hPa) and temperature (°C).
    #[must_use]
    pub const fn new(pressure: f64, temperature: f64) -> Self {
        Self {
            pressure,
            temperature,
        }
    }

    /// Standard sea-level conditions: 1013.25 hPa and 15 °C.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(STANDARD_PRESSURE_HPA, STANDARD_TEMPERATURE_C)
    }

    /// Gets the atmospheric pressure in hectopascals.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Gets the temperature in degrees Celsius.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Checks whether these conditions are physically plausible enough to correct for.
    #[must_use]
    pub fn is_refraction_applicable(&self) -> bool {
        self.pressure > 0.0
            && self.pressure < 3000.0
            && self.temperature > -273.0
            && self.temperature < 273.0
    }
}

impl Default for AtmosphericConditions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Solar position in topocentric coordinates.
///
/// Represents the sun's position as seen from a specific point on Earth's surface:
/// - Azimuth: 0° = North, measured clockwise, always in [0, 360)
/// - Zenith angle: 0° = directly overhead, 90° = horizon, above 90° = below horizon
/// - Elevation angle: 90° = directly overhead, 0° = horizon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Zenith angle in degrees (0° = zenith, 90° = horizon)
    zenith_angle: f64,
}

impl SolarPosition {
    pub(crate) const fn new(azimuth: f64, zenith_angle: f64) -> Self {
        Self {
            azimuth,
            zenith_angle,
        }
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the zenith angle in degrees (0° = zenith, 90° = horizon).
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the elevation angle in degrees.
    ///
    /// This is the complement of the zenith angle: elevation = 90° - zenith.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation_angle() <= 0.0
    }
}
