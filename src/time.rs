//! Time conversions feeding the solar position core.
//!
//! Two scalar time axes are derived from a UTC calendar instant:
//! - the continuous day count `t` used by Grena's algorithm, and
//! - the decimal year used by the ΔT estimator.

#![allow(clippy::unreadable_literal)]

use crate::error::check_month;
use crate::math::trunc;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

/// Day count offset placing `t = 0` at 2060-01-01 00:00 UT.
const EPOCH_OFFSET_DAYS: f64 = 21958.0;

/// Grena's approximation of one second expressed in days.
const DAYS_PER_SECOND: f64 = 1.1574e-5;

/// Grena's approximation of one hour expressed in days.
const DAYS_PER_HOUR: f64 = 0.0416667;

/// Continuous day count used as the time axis of Grena's algorithm.
///
/// The value counts days (with fractional part) from 2060-01-01 00:00 UT, so every
/// date before that is negative. It is exact to the day-fraction precision of the
/// input, which matters because the algorithm multiplies it by angular rates of
/// roughly one revolution per day.
///
/// # Example
/// ```
/// use solarpos::time::DayCount;
///
/// let t = DayCount::from_utc(2012, 1, 1, 11, 15, 45.0).unwrap();
/// assert_eq!(t.days(), -17531.53072879125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayCount(f64);

impl DayCount {
    /// Computes the day count from UTC calendar components.
    ///
    /// # Arguments
    /// * `year` - Year (proleptic Gregorian calendar)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month (1-31)
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59, can include fractional seconds)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any component is outside its valid range.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        check_month(month)?;
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime("second must be between 0 and 59.999..."));
        }

        Ok(Self::from_components(year, month, day, hour, minute, second))
    }

    /// Computes the day count for a timezone-aware chrono `DateTime`.
    ///
    /// The instant is first converted to UTC; the offset is applied exactly.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        Self::from_components(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        )
    }

    /// Wraps a raw day count, e.g. one computed elsewhere or stepped in a loop.
    #[must_use]
    pub const fn from_days(days: f64) -> Self {
        Self(days)
    }

    /// Gets the raw day count.
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.0
    }

    /// Shifts the day count from universal to terrestrial time.
    ///
    /// `tE = t + 1.1574e-5 * ΔT`
    #[must_use]
    pub fn terrestrial(&self, delta_t: f64) -> f64 {
        self.0 + DAYS_PER_SECOND * delta_t
    }

    fn from_components(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Self {
        let mut y = f64::from(year);
        let mut m = f64::from(month);
        let d = f64::from(day);
        let h = f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0;

        // January and February count as months 13 and 14 of the previous year
        if m <= 2.0 {
            m += 12.0;
            y -= 1.0;
        }

        Self(
            trunc(365.25 * (y - 2000.0)) + trunc(30.6001 * (m + 1.0)) - trunc(0.01 * y)
                + d
                + DAYS_PER_HOUR * h
                - EPOCH_OFFSET_DAYS,
        )
    }
}

/// Calculates the decimal year used as the time axis of the ΔT estimator.
///
/// `year + (month - 0.5) / 12`, i.e. the middle of the given month. The month
/// granularity matches the precision of the historical fit.
///
/// # Errors
/// Returns `InvalidDateTime` if month is outside 1 to 12.
///
/// # Example
/// ```
/// use solarpos::time::decimal_year;
///
/// assert_eq!(decimal_year(2024, 6).unwrap(), 2024.0 + 5.5 / 12.0);
/// assert!(decimal_year(2024, 13).is_err());
/// ```
pub fn decimal_year(year: i32, month: u32) -> Result<f64> {
    check_month(month)?;
    Ok(decimal_year_unchecked(year, month))
}

/// Calculates the decimal year of an instant from its UTC calendar year and month.
#[cfg(feature = "chrono")]
#[must_use]
pub fn decimal_year_of<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let utc = datetime.with_timezone(&Utc);
    decimal_year_unchecked(utc.year(), utc.month())
}

pub(crate) fn decimal_year_unchecked(year: i32, month: u32) -> f64 {
    f64::from(year) + (f64::from(month) - 0.5) / 12.0
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}
