//! # solarpos
//!
//! Topocentric sun position (azimuth and zenith angle) for a point on Earth at a given
//! instant, with atmospheric refraction correction and ΔT (Delta T) estimation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate is built around two pure numerical algorithms:
//! - **Grena3**: algorithm no. 3 of Grena (2012), a closed-form pipeline from calendar
//!   time to horizontal coordinates (maximum error 0.01° for the years 2010-2110)
//! - **ΔT estimation**: the piecewise polynomial fit of Espenak & Meeus (2006, updated
//!   2014), spanning the years -500 to 3000 with long-term extrapolation beyond
//!
//! Every calculation is a stateless function of its explicit inputs. Nothing in the
//! crate holds shared state, performs I/O, or fails once its inputs are constructed.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based API and [`Observation`]
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `cli`: Build the `sol` command-line tool
//!
//! ## Quick Start
//!
//! ### Solar Position (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solarpos::{AtmosphericConditions, GeographicPosition, Observation};
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let vienna = GeographicPosition::new(48.21, 16.37).unwrap();
//!
//! // ΔT is estimated from the date unless given explicitly
//! let position = Observation::new(datetime, vienna)
//!     .with_atmosphere(AtmosphericConditions::standard())
//!     .solar_position();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Zenith angle: {:.3}°", position.zenith_angle());
//! # }
//! ```
//!
//! ### Solar Position (numeric API, no chrono)
//! ```rust
//! use solarpos::{grena3, time::DayCount, AtmosphericConditions, DeltaT, GeographicPosition};
//!
//! let t = DayCount::from_utc(2026, 6, 21, 10, 0, 0.0).unwrap();
//! let delta_t = DeltaT::estimate_from_date(2026, 6).unwrap();
//! let position = grena3::solar_position_from_day_count(
//!     t,
//!     GeographicPosition::new(48.21, 16.37).unwrap(),
//!     delta_t,
//!     AtmosphericConditions::standard(),
//! );
//!
//! assert!(position.is_sun_up());
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead (zenith), 90° = horizon
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead
//!
//! ## References
//!
//! - Grena, R. (2012). Five new algorithms for the computation of sun position from 2010 to 2110.
//!   Solar Energy, 86(5), 1323-1337. DOI: <http://dx.doi.org/10.1016/j.solener.2012.01.024>
//! - Espenak, F.; Meeus, J. (2006). Five Millennium Canon of Solar Eclipses: -1999 to +3000.
//!   NASA/TP-2006-214141.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::delta_t::{DeltaT, DeltaTInterval, LocalVariable};
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::observation::Observation;
pub use crate::types::{AtmosphericConditions, GeographicPosition, SolarPosition};

// Algorithm modules
pub mod delta_t;
pub mod grena3;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
#[cfg(feature = "chrono")]
pub mod observation;
pub mod time;
pub mod units;
