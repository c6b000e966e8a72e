// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical time standards.
//!
//! This crate converts instants between the time standards used in
//! astronomy while keeping every date as a two-part Julian Date, so no
//! conversion collapses the day number and the fraction into one `f64`.
//!
//! # Core types
//!
//! - [`JulianDate`]: two-part Julian Date tagged with a [`TimeStandard`].
//! - [`TimeStandard`]: UTC, UT1, TAI, TT, TCG, TDB, TCB (plus `Local` and
//!   `Unspecified`).
//! - [`DeltaAt`]: `TAI − UTC` with a [`LeapSecondStatus`] flag.
//! - [`Observer`]: topocentric site for the `TDB − TT` series.
//! - [`Time<S>`]: typed instant parameterised by a [`TimeScale`] marker.
//!
//! # Conversion graph
//!
//! The [`convert`] module holds one free function per edge. Fixed-offset
//! edges (TAI ↔ TT ↔ TCG, TDB ↔ TCB) need nothing but the date; UT1 edges
//! take the published `UT1 − UTC` or `ΔT`; TT ↔ TDB takes a measured offset
//! or evaluates the [`barycentric`] series; UTC ↔ TAI resolves `ΔAT` from
//! the built-in [`leap_seconds`] table.
//!
//! ```
//! use timescale::{convert, JulianDate, TimeStandard};
//!
//! let utc = JulianDate::with_standard(2_453_750.5, 0.892_100_694, TimeStandard::Utc)?;
//! let tt = convert::utc_to_tt(utc)?;
//! assert_eq!(tt.standard(), TimeStandard::Tt);
//! # Ok::<(), timescale::TimeError>(())
//! ```
//!
//! # Typed scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`UTC`] | Coordinated Universal Time |
//! | [`UT1`] | Universal Time |
//! | [`TAI`] | International Atomic Time |
//! | [`TT`] | Terrestrial Time |
//! | [`TCG`] | Geocentric Coordinate Time |
//! | [`TDB`] | Barycentric Dynamical Time |
//! | [`TCB`] | Barycentric Coordinate Time |
//!
//! [`Time::to`] only compiles for pairs linked without calibration data.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use timescale::{Observer, Time, TDB, TT};
//!
//! let tt = Time::<TT>::from_utc(Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap())?;
//! let tdb: Time<TDB> = tt.to_tdb(&Observer::GEOCENTER)?;
//! assert!((tdb.fraction_of_day() - tt.fraction_of_day()).abs() < 1e-7);
//! # Ok::<(), timescale::TimeError>(())
//! ```

pub mod barycentric;
pub mod calendar;
mod civil;
pub mod constants;
pub mod convert;
mod error;
pub(crate) mod instant;
mod julian_date;
pub mod leap_seconds;
pub(crate) mod scales;
mod standard;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use barycentric::{tdb_minus_tt, Observer};
pub use error::{TimeError, TimeResult};
pub use instant::{ConvertTo, Time, TimeScale};
pub use julian_date::JulianDate;
pub use leap_seconds::{
    delta_at, delta_at_for_date, delta_at_for_datetime, DeltaAt, LeapSecondStatus,
};
pub use scales::{TAI, TCB, TCG, TDB, TT, UT1, UTC};
pub use standard::TimeStandard;
