//! ΔT (Delta T) estimation.
//!
//! ΔT is the difference between Terrestrial Time (TT) and Universal Time (UT), in
//! seconds. The estimate follows the polynomial fits of Espenak and Meeus, "Five
//! Millennium Canon of Solar Eclipses: -1999 to +3000" (NASA/TP-2006-214141), with
//! Espenak's 2014 update for the years from 2005 onwards.
//! See: <https://www.eclipsewise.com/help/deltatpoly2014.html>
//!
//! The fit is an ordered table of half-open intervals of decimal year, split at 14
//! boundary years. Each interval has its own local time variable and polynomial. Values are not continuous across
//! interval boundaries.

#![allow(clippy::unreadable_literal)]

use crate::Result;
use crate::math::polynomial;
use crate::time::decimal_year;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, TimeZone};

/// How an interval derives its local time variable from the decimal year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalVariable {
    /// Centuries since `origin`: `u = (year - origin) / 100`.
    Centuries {
        /// Origin year.
        origin: f64,
    },
    /// Years since `origin`: `t = year - origin`.
    Years {
        /// Origin year.
        origin: f64,
    },
}

impl LocalVariable {
    /// Evaluates the local variable for a decimal year.
    #[must_use]
    pub fn at(&self, year: f64) -> f64 {
        match *self {
            Self::Centuries { origin } => (year - origin) / 100.0,
            Self::Years { origin } => year - origin,
        }
    }
}

/// One row of the ΔT fit: a half-open range of decimal years and its polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaTInterval {
    lower: f64,
    upper: f64,
    variable: LocalVariable,
    coefficients: &'static [f64],
}

impl DeltaTInterval {
    const fn new(
        lower: f64,
        upper: f64,
        variable: LocalVariable,
        coefficients: &'static [f64],
    ) -> Self {
        Self {
            lower,
            upper,
            variable,
            coefficients,
        }
    }

    /// Gets the inclusive lower bound (decimal year); `-∞` for the first interval.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Gets the exclusive upper bound (decimal year); `+∞` for the last interval.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Gets the rule deriving the local time variable.
    #[must_use]
    pub const fn variable(&self) -> LocalVariable {
        self.variable
    }

    /// Gets the polynomial coefficients, ascending from the constant term.
    #[must_use]
    pub const fn coefficients(&self) -> &'static [f64] {
        self.coefficients
    }

    /// Checks whether the decimal year falls into `[lower, upper)`.
    #[must_use]
    pub fn contains(&self, year: f64) -> bool {
        self.lower <= year && year < self.upper
    }

    /// Evaluates this interval's polynomial, regardless of whether `year` is inside it.
    #[must_use]
    pub fn evaluate(&self, year: f64) -> f64 {
        polynomial(self.coefficients, self.variable.at(year))
    }
}

const fn centuries(origin: f64) -> LocalVariable {
    LocalVariable::Centuries { origin }
}

const fn years(origin: f64) -> LocalVariable {
    LocalVariable::Years { origin }
}

/// Long-term parabola used before -500 and from 3000 onwards.
const LONG_TERM: &[f64] = &[-20.0, 0.0, 32.0];

static INTERVALS: [DeltaTInterval; 15] = [
    DeltaTInterval::new(f64::NEG_INFINITY, -500.0, centuries(1820.0), LONG_TERM),
    DeltaTInterval::new(
        -500.0,
        500.0,
        centuries(0.0),
        &[
            10583.6,
            -1014.41,
            33.78311,
            -5.952053,
            -0.1798452,
            0.022174192,
            0.0090316521,
        ],
    ),
    DeltaTInterval::new(
        500.0,
        1600.0,
        centuries(1000.0),
        &[
            1574.2,
            -556.01,
            71.23472,
            0.319781,
            -0.8503463,
            -0.005050998,
            0.0083572073,
        ],
    ),
    DeltaTInterval::new(
        1600.0,
        1700.0,
        years(1600.0),
        &[120.0, -0.9808, -0.01532, 1.0 / 7129.0],
    ),
    DeltaTInterval::new(
        1700.0,
        1800.0,
        years(1700.0),
        &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
    ),
    DeltaTInterval::new(
        1800.0,
        1860.0,
        years(1800.0),
        &[
            13.72,
            -0.332447,
            0.0068612,
            0.0041116,
            -0.00037436,
            0.0000121272,
            -0.0000001699,
            0.000000000875,
        ],
    ),
    DeltaTInterval::new(
        1860.0,
        1900.0,
        years(1860.0),
        &[
            7.62,
            0.5737,
            -0.251754,
            0.01680668,
            -0.0004473624,
            1.0 / 233_174.0,
        ],
    ),
    DeltaTInterval::new(
        1900.0,
        1920.0,
        years(1900.0),
        &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
    ),
    DeltaTInterval::new(
        1920.0,
        1941.0,
        years(1920.0),
        &[21.20, 0.84493, -0.076100, 0.0020936],
    ),
    DeltaTInterval::new(
        1941.0,
        1961.0,
        years(1950.0),
        &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    ),
    DeltaTInterval::new(
        1961.0,
        1986.0,
        years(1975.0),
        &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    ),
    DeltaTInterval::new(
        1986.0,
        2005.0,
        years(2000.0),
        &[
            63.86,
            0.3345,
            -0.060374,
            0.0017275,
            0.000651814,
            0.00002373599,
        ],
    ),
    DeltaTInterval::new(2005.0, 2015.0, years(2005.0), &[64.69, 0.2930]),
    DeltaTInterval::new(2015.0, 3000.0, years(2015.0), &[67.62, 0.3645, 0.0039755]),
    DeltaTInterval::new(3000.0, f64::INFINITY, centuries(1820.0), LONG_TERM),
];

/// ΔT (Delta T) estimation functions.
///
/// All estimates are total: any decimal year yields a value, however far it lies
/// outside the range the fit was made for.
pub struct DeltaT;

impl DeltaT {
    /// Gets the ordered interval table of the fit, from the distant past to the far future.
    ///
    /// # Example
    /// ```
    /// use solarpos::DeltaT;
    ///
    /// let table = DeltaT::intervals();
    /// assert_eq!(table.len(), 15);
    /// assert!(table.windows(2).all(|w| w[0].upper() == w[1].lower()));
    /// ```
    #[must_use]
    pub fn intervals() -> &'static [DeltaTInterval] {
        &INTERVALS
    }

    /// Selects the interval a decimal year belongs to.
    ///
    /// The first interval with `year < upper` wins, so a boundary year belongs to
    /// the interval starting at it. `+∞` selects the last interval and `NaN` the first.
    #[must_use]
    pub fn interval_for(year: f64) -> &'static DeltaTInterval {
        let index = INTERVALS.partition_point(|interval| interval.upper <= year);
        &INTERVALS[index.min(INTERVALS.len() - 1)]
    }

    /// Estimates ΔT for a given decimal year.
    ///
    /// # Arguments
    /// * `decimal_year` - Year with fractional part (e.g., 2024.5 for mid-2024)
    ///
    /// # Returns
    /// Estimated ΔT in seconds. `NaN` yields `NaN`.
    ///
    /// # Example
    /// ```
    /// use solarpos::DeltaT;
    ///
    /// let delta_t = DeltaT::estimate(2024.0);
    /// assert!(delta_t > 60.0 && delta_t < 80.0);
    /// ```
    #[must_use]
    pub fn estimate(decimal_year: f64) -> f64 {
        Self::interval_for(decimal_year).evaluate(decimal_year)
    }

    /// Estimates ΔT from year and month.
    ///
    /// Calculates decimal year as: year + (month - 0.5) / 12
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if month is outside the range 1-12.
    pub fn estimate_from_date(year: i32, month: u32) -> Result<f64> {
        Ok(Self::estimate(decimal_year(year, month)?))
    }

    /// Estimates ΔT for an instant, using its UTC calendar year and month.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn estimate_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
        Self::estimate(crate::time::decimal_year_of(datetime))
    }

    /// Estimates ΔT from any date-like type (`NaiveDate`, `NaiveDateTime`, ...).
    ///
    /// Year and month are taken as they are; for zoned instants prefer
    /// [`DeltaT::estimate_from_datetime`], which normalizes to UTC first.
    #[cfg(feature = "chrono")]
    #[allow(clippy::needless_pass_by_value)]
    #[must_use]
    pub fn estimate_from_date_like<D: Datelike>(date: D) -> f64 {
        Self::estimate(crate::time::decimal_year_unchecked(
            date.year(),
            date.month(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_table_is_contiguous_and_ordered() {
        let table = DeltaT::intervals();
        assert_eq!(table[0].lower(), f64::NEG_INFINITY);
        assert_eq!(table[14].upper(), f64::INFINITY);
        for pair in table.windows(2) {
            assert_eq!(pair[0].upper(), pair[1].lower());
            assert!(pair[0].lower() < pair[0].upper());
        }
    }

    #[test]
    fn test_selection_agrees_with_contains() {
        for interval in DeltaT::intervals() {
            for year in [interval.lower(), interval.upper()] {
                if year.is_finite() {
                    assert!(DeltaT::interval_for(year).contains(year), "year {year}");
                }
            }
        }
    }

    #[test]
    fn test_boundary_years_select_the_starting_interval() {
        for boundary in [
            -500.0, 500.0, 1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0,
            2005.0, 2015.0, 3000.0,
        ] {
            let interval = DeltaT::interval_for(boundary);
            assert_eq!(interval.lower(), boundary);
            assert!(DeltaT::estimate(boundary).is_finite());
        }
    }

    #[test]
    fn test_interval_constants_at_their_origin() {
        assert!((DeltaT::estimate(1600.0) - 120.0).abs() < EPSILON);
        assert!((DeltaT::estimate(1700.0) - 8.83).abs() < EPSILON);
        assert!((DeltaT::estimate(1800.0) - 13.72).abs() < EPSILON);
        assert!((DeltaT::estimate(1860.0) - 7.62).abs() < EPSILON);
        assert!((DeltaT::estimate(1900.0) + 2.79).abs() < EPSILON);
        assert!((DeltaT::estimate(1920.0) - 21.20).abs() < EPSILON);
        assert!((DeltaT::estimate(1950.0) - 29.07).abs() < EPSILON);
        assert!((DeltaT::estimate(1975.0) - 45.45).abs() < EPSILON);
        assert!((DeltaT::estimate(2000.0) - 63.86).abs() < EPSILON);
        assert!((DeltaT::estimate(2005.0) - 64.69).abs() < EPSILON);
        assert!((DeltaT::estimate(2015.0) - 67.62).abs() < EPSILON);
    }

    #[test]
    fn test_boundary_discontinuities_are_preserved() {
        let just_before = DeltaT::estimate(2999.999_999);
        let at = DeltaT::estimate(3000.0);
        // quadratic 2015-3000 ends near 4284 s, long-term parabola starts at 4435.68 s
        assert!((at - 4435.68).abs() < 1e-6);
        assert!((just_before - 4283.78).abs() < 0.01);

        let before_1900 = DeltaT::estimate(1899.999_999);
        assert!((before_1900 - DeltaT::estimate(1900.0)).abs() > 0.01);
    }

    #[test]
    fn test_long_term_parabola() {
        // u = (-1000 - 1820) / 100 = -28.2
        assert!((DeltaT::estimate(-1000.0) - (-20.0 + 32.0 * 28.2 * 28.2)).abs() < 1e-6);
        assert!((DeltaT::estimate(3500.0) - 9011.68).abs() < 1e-6);
    }

    #[test]
    fn test_modern_estimates() {
        let delta_t_2000 = DeltaT::estimate(2000.0);
        let delta_t_2020 = DeltaT::estimate(2020.0);

        assert!(delta_t_2000 > 60.0 && delta_t_2000 < 70.0);
        assert!(delta_t_2020 > 65.0 && delta_t_2020 < 75.0);
        assert!(delta_t_2020 > delta_t_2000);
    }

    #[test]
    fn test_non_finite_years() {
        assert!(DeltaT::estimate(f64::NAN).is_nan());
        assert_eq!(DeltaT::estimate(f64::INFINITY), f64::INFINITY);
        assert_eq!(DeltaT::estimate(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_estimate_from_date() {
        let delta_t = DeltaT::estimate_from_date(2024, 6).unwrap();
        assert_eq!(delta_t, DeltaT::estimate(2024.0 + 5.5 / 12.0));

        assert!(DeltaT::estimate_from_date(2024, 13).is_err());
        assert!(DeltaT::estimate_from_date(2024, 0).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_estimate_from_chrono_types() {
        use chrono::{FixedOffset, NaiveDate, Utc};

        let fixed = "2024-06-15T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = "2024-06-15T19:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let naive = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let expected = DeltaT::estimate_from_date(2024, 6).unwrap();
        assert_eq!(DeltaT::estimate_from_datetime(&fixed), expected);
        assert_eq!(DeltaT::estimate_from_datetime(&utc), expected);
        assert_eq!(DeltaT::estimate_from_date_like(naive), expected);
    }
}
