//! Grena3 solar position algorithm implementation.
//!
//! This follows the no. 3 algorithm described in Grena, 'Five new algorithms for the computation
//! of sun position from 2010 to 2110', Solar Energy 86 (2012) pp. 1323-1337.
//!
//! The algorithm is designed for the years 2010 to 2110, with a maximum error of 0.01 degrees.
//! Outside that range it keeps producing values, with degrading accuracy.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    PI, asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin,
    sqrt, tan,
};
use crate::time::DayCount;
use crate::{AtmosphericConditions, GeographicPosition, SolarPosition};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Calculate solar position using the Grena3 algorithm.
///
/// The instant is normalized to UTC before anything else.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `position` - Observer location
/// * `delta_t` - ΔT in seconds (difference between TT and UT)
/// * `atmosphere` - Conditions used for refraction correction
///
/// # Example
/// ```rust
/// use solarpos::{grena3, AtmosphericConditions, GeographicPosition};
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2015-06-23T10:30:12Z".parse::<DateTime<Utc>>().unwrap();
/// let berlin = GeographicPosition::new(52.521667, 13.413333).unwrap();
/// let position = grena3::solar_position(
///     datetime,
///     berlin,
///     65.0, // deltaT (seconds)
///     AtmosphericConditions::new(1000.0, 20.0),
/// );
///
/// assert!((position.azimuth() - 162.233).abs() < 0.001);
/// assert!((position.zenith_angle() - 29.990).abs() < 0.001);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
#[must_use]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    position: GeographicPosition,
    delta_t: f64,
    atmosphere: AtmosphericConditions,
) -> SolarPosition {
    solar_position_from_day_count(
        DayCount::from_datetime(&datetime),
        position,
        delta_t,
        atmosphere,
    )
}

/// Calculate solar position using the Grena3 algorithm from a pre-computed day count.
///
/// This is the numeric entry point; it does not need chrono.
///
/// # Example
/// ```rust
/// use solarpos::{grena3, time::DayCount, AtmosphericConditions, GeographicPosition};
///
/// let t = DayCount::from_utc(2015, 6, 23, 10, 30, 12.0).unwrap();
/// let berlin = GeographicPosition::new(52.521667, 13.413333).unwrap();
/// let position = grena3::solar_position_from_day_count(
///     t,
///     berlin,
///     65.0,
///     AtmosphericConditions::new(1000.0, 20.0),
/// );
///
/// assert!(position.is_sun_up());
/// ```
#[must_use]
pub fn solar_position_from_day_count(
    t: DayCount,
    position: GeographicPosition,
    delta_t: f64,
    atmosphere: AtmosphericConditions,
) -> SolarPosition {
    let topocentric = Topocentric::calculate(t, position, delta_t);

    let delta_re = refraction_correction(topocentric.elevation, atmosphere);
    let z = PI / 2.0 - topocentric.elevation - delta_re;

    SolarPosition::new(topocentric.azimuth_degrees(), radians_to_degrees(z))
}

/// Uncorrected topocentric elevation and azimuth, in radians.
#[derive(Debug, Clone, Copy)]
struct Topocentric {
    /// True elevation including parallax, without refraction
    elevation: f64,
    /// Azimuth measured from south, positive towards west
    gamma: f64,
}

impl Topocentric {
    fn calculate(t: DayCount, position: GeographicPosition, delta_t: f64) -> Self {
        let t_e = t.terrestrial(delta_t);
        let omega_at_e = 0.0172019715 * t_e;

        // Apparent sun longitude, including nutation and aberration
        let lambda = -1.388803
            + 1.720279216e-2 * t_e
            + 3.3366e-2 * sin(omega_at_e - 0.06172)
            + 3.53e-4 * sin(2.0 * omega_at_e - 0.1163);

        // Obliquity of the ecliptic
        let epsilon = 4.089567e-1 - 6.19e-9 * t_e;

        let s_lambda = sin(lambda);
        let c_lambda = cos(lambda);
        let s_epsilon = sin(epsilon);
        let c_epsilon = sqrt(1.0 - s_epsilon * s_epsilon);

        let mut alpha = atan2(s_lambda * c_epsilon, c_lambda);
        if alpha < 0.0 {
            alpha += 2.0 * PI;
        }

        let delta = asin(s_lambda * s_epsilon);

        // Hour angle uses the universal-time day count, normalized to (-π, π]
        let mut h =
            1.7528311 + 6.300388099 * t.days() + degrees_to_radians(position.longitude()) - alpha;
        h = ((h + PI) % (2.0 * PI)) - PI;
        if h < -PI {
            h += 2.0 * PI;
        }

        let s_phi = sin(degrees_to_radians(position.latitude()));
        let c_phi = sqrt(1.0 - s_phi * s_phi);
        let s_delta = sin(delta);
        let c_delta = sqrt(1.0 - s_delta * s_delta);
        let s_h = sin(h);
        let c_h = cos(h);

        let s_epsilon0 = s_phi * s_delta + c_phi * c_delta * c_h;
        let elevation = asin(s_epsilon0) - 4.26e-5 * sqrt(1.0 - s_epsilon0 * s_epsilon0);
        let gamma = atan2(s_h, c_h * s_phi - s_delta * c_phi / c_delta);

        Self { elevation, gamma }
    }

    fn azimuth_degrees(&self) -> f64 {
        normalize_degrees_0_to_360(radians_to_degrees(self.gamma + PI))
    }
}

/// Refraction in radians for a true elevation, or zero when the sun is not above the
/// horizon or the conditions are outside the plausible domain.
fn refraction_correction(elevation: f64, atmosphere: AtmosphericConditions) -> f64 {
    if elevation > 0.0 && atmosphere.is_refraction_applicable() {
        (0.08422 * (atmosphere.pressure() / 1000.0))
            / ((273.0 + atmosphere.temperature())
                * tan(elevation + 0.003138 / (elevation + 0.08919)))
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> GeographicPosition {
        GeographicPosition::new(52.521667, 13.413333).unwrap()
    }

    fn reference_day_count() -> DayCount {
        DayCount::from_utc(2015, 6, 23, 10, 30, 12.0).unwrap()
    }

    #[test]
    fn test_grena3_reference_position() {
        let position = solar_position_from_day_count(
            reference_day_count(),
            berlin(),
            65.0,
            AtmosphericConditions::new(1000.0, 20.0),
        );

        assert!((position.azimuth() - 162.233).abs() < 0.001);
        assert!((position.zenith_angle() - 29.990).abs() < 0.001);
    }

    #[test]
    fn test_grena3_is_deterministic() {
        let atmosphere = AtmosphericConditions::standard();
        let first =
            solar_position_from_day_count(reference_day_count(), berlin(), 65.0, atmosphere);
        let second =
            solar_position_from_day_count(reference_day_count(), berlin(), 65.0, atmosphere);

        assert_eq!(first.azimuth().to_bits(), second.azimuth().to_bits());
        assert_eq!(
            first.zenith_angle().to_bits(),
            second.zenith_angle().to_bits()
        );
    }

    #[test]
    fn test_refraction_omitted_outside_domain() {
        let t = reference_day_count();
        let unrefracted =
            radians_to_degrees(PI / 2.0 - Topocentric::calculate(t, berlin(), 65.0).elevation);

        for atmosphere in [
            AtmosphericConditions::new(0.0, 20.0),
            AtmosphericConditions::new(3000.0, 20.0),
            AtmosphericConditions::new(1000.0, 300.0),
            AtmosphericConditions::new(1000.0, -273.0),
        ] {
            let position = solar_position_from_day_count(t, berlin(), 65.0, atmosphere);
            assert_eq!(position.zenith_angle(), unrefracted, "{atmosphere:?}");
        }

        let refracted = solar_position_from_day_count(
            t,
            berlin(),
            65.0,
            AtmosphericConditions::new(1000.0, 20.0),
        );
        assert!(refracted.zenith_angle() < unrefracted);
    }

    #[test]
    fn test_refraction_omitted_below_horizon() {
        // Local midnight in Berlin
        let t = DayCount::from_utc(2015, 6, 23, 23, 0, 0.0).unwrap();
        let topocentric = Topocentric::calculate(t, berlin(), 65.0);
        assert!(topocentric.elevation < 0.0);

        assert_eq!(
            refraction_correction(topocentric.elevation, AtmosphericConditions::standard()),
            0.0
        );

        let position =
            solar_position_from_day_count(t, berlin(), 65.0, AtmosphericConditions::standard());
        assert!(position.zenith_angle() > 90.0);
        assert!(position.is_sun_down());
    }

    #[test]
    fn test_refraction_grows_towards_horizon() {
        let atmosphere = AtmosphericConditions::standard();
        let high = refraction_correction(degrees_to_radians(45.0), atmosphere);
        let low = refraction_correction(degrees_to_radians(1.0), atmosphere);

        assert!(high > 0.0);
        assert!(low > high);
        // roughly one arc minute at 45°, under a degree near the horizon
        assert!(radians_to_degrees(high) < 0.03);
        assert!(radians_to_degrees(low) < 1.0);
    }

    #[test]
    fn test_azimuth_range_over_a_day() {
        let start = DayCount::from_utc(2024, 3, 20, 0, 0, 0.0).unwrap();
        for step in 0..(24 * 12) {
            let t = DayCount::from_days(start.days() + f64::from(step) / 288.0);
            for (lat, lon) in [(0.0, 0.0), (89.9, 180.0), (-89.9, -180.0), (45.0, -120.0)] {
                let position = solar_position_from_day_count(
                    t,
                    GeographicPosition::new(lat, lon).unwrap(),
                    69.0,
                    AtmosphericConditions::standard(),
                );
                assert!(
                    (0.0..360.0).contains(&position.azimuth()),
                    "azimuth {} out of range",
                    position.azimuth()
                );
                assert!(position.zenith_angle().is_finite());
            }
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_timezone_independence() {
        use chrono::{FixedOffset, Utc};

        let fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = "2023-06-21T19:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let location = GeographicPosition::new(37.7749, -122.4194).unwrap();

        let position1 = solar_position(fixed, location, 69.0, AtmosphericConditions::standard());
        let position2 = solar_position(utc, location, 69.0, AtmosphericConditions::standard());

        assert_eq!(position1, position2);
    }
}
