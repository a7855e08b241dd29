//! A single configuration value describing one solar position request.

use crate::{AtmosphericConditions, DeltaT, GeographicPosition, SolarPosition, grena3};
use chrono::{DateTime, TimeZone, Utc};

/// Everything needed for one solar position calculation.
///
/// Built once by the caller (for example from command-line flags) and passed to
/// [`Observation::solar_position`]. When no explicit ΔT is given, it is estimated
/// from the instant's decimal year.
///
/// # Example
/// ```
/// use solarpos::{AtmosphericConditions, GeographicPosition, Observation};
/// use chrono::{DateTime, FixedOffset};
///
/// let instant = "2015-06-23T12:30:12+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let observation = Observation::new(instant, GeographicPosition::new(52.521667, 13.413333).unwrap())
///     .with_delta_t(65.0)
///     .with_atmosphere(AtmosphericConditions::new(1000.0, 20.0));
///
/// let position = observation.solar_position();
/// assert!((position.azimuth() - 162.233).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    instant: DateTime<Utc>,
    position: GeographicPosition,
    atmosphere: AtmosphericConditions,
    delta_t: Option<f64>,
}

impl Observation {
    /// Creates an observation with standard atmosphere and an estimated ΔT.
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>, position: GeographicPosition) -> Self {
        Self {
            instant: instant.with_timezone(&Utc),
            position,
            atmosphere: AtmosphericConditions::standard(),
            delta_t: None,
        }
    }

    /// Uses an explicit ΔT in seconds instead of the estimate.
    #[must_use]
    pub fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = Some(delta_t);
        self
    }

    /// Uses the given atmospheric conditions for refraction correction.
    #[must_use]
    pub fn with_atmosphere(mut self, atmosphere: AtmosphericConditions) -> Self {
        self.atmosphere = atmosphere;
        self
    }

    /// Gets the instant, normalized to UTC.
    #[must_use]
    pub const fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Gets the observer location.
    #[must_use]
    pub const fn position(&self) -> GeographicPosition {
        self.position
    }

    /// Gets the atmospheric conditions.
    #[must_use]
    pub const fn atmosphere(&self) -> AtmosphericConditions {
        self.atmosphere
    }

    /// Checks whether ΔT will be estimated rather than taken as given.
    #[must_use]
    pub const fn is_delta_t_estimated(&self) -> bool {
        self.delta_t.is_none()
    }

    /// Gets the ΔT in seconds used for this observation.
    #[must_use]
    pub fn delta_t(&self) -> f64 {
        self.delta_t
            .unwrap_or_else(|| DeltaT::estimate_from_datetime(&self.instant))
    }

    /// Calculates the topocentric sun position for this observation.
    #[must_use]
    pub fn solar_position(&self) -> SolarPosition {
        grena3::solar_position(self.instant, self.position, self.delta_t(), self.atmosphere)
    }
}
