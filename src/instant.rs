// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Scale-parameterised instant.
//!
//! [`Time<S>`] wraps a [`JulianDate`] whose tag is pinned to the marker's
//! [`TimeScale::STANDARD`]. The tag is checked once, when the value enters
//! the typed layer, so every conversion reachable through [`Time::to`] is
//! known to be well formed at compile time. Edges that need calibration
//! data (UT1, or TDB from a measured offset) live in inherent `impl` blocks
//! gated on the concrete marker.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Sub;

use chrono::{DateTime, Utc};
use qtty::{Days, Seconds};

use crate::barycentric::Observer;
use crate::convert;
use crate::error::{TimeError, TimeResult};
use crate::julian_date::JulianDate;
use crate::scales::{TDB, TT, UT1, UTC};
use crate::standard::TimeStandard;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A scale is a display label plus the [`TimeStandard`] tag carried by the
/// dates it wraps.
pub trait TimeScale: Copy + Clone + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label, e.g. `"TAI"`.
    const LABEL: &'static str;

    /// Tag of every [`JulianDate`] inside a `Time<Self>`.
    const STANDARD: TimeStandard;
}

/// A calibration-free edge from `Self` to `T`.
///
/// Implemented by macro in the `scales` module for every pair that
/// needs no measured offset, and for every identity.
pub trait ConvertTo<T: TimeScale>: TimeScale {
    /// Convert a date tagged `Self::STANDARD` to one tagged `T::STANDARD`.
    fn convert(jd: JulianDate) -> TimeResult<JulianDate>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    jd: JulianDate,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from a half-integer day number and a fraction of day.
    #[inline]
    pub fn new(day_number: f64, fraction_of_day: f64) -> TimeResult<Self> {
        JulianDate::with_standard(day_number, fraction_of_day, S::STANDARD).map(Self::wrap)
    }

    /// Build from a single-`f64` Julian Date, split exactly.
    #[inline]
    pub fn from_date(date: f64) -> TimeResult<Self> {
        JulianDate::from_date_with_standard(date, S::STANDARD).map(Self::wrap)
    }

    /// Adopt an existing date.
    ///
    /// An untagged date is retagged to `S`; a date tagged with any other
    /// defined standard is rejected.
    pub fn from_julian_date(jd: JulianDate) -> TimeResult<Self> {
        jd.standard().ensure(S::STANDARD)?;
        Ok(Self::wrap(jd.retagged(S::STANDARD)))
    }

    #[inline]
    const fn wrap(jd: JulianDate) -> Self {
        Self {
            jd,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying date, tagged `S::STANDARD`.
    #[inline]
    pub const fn julian_date(&self) -> JulianDate {
        self.jd
    }

    #[inline]
    pub const fn day_number(&self) -> f64 {
        self.jd.day_number()
    }

    #[inline]
    pub const fn fraction_of_day(&self) -> f64 {
        self.jd.fraction_of_day()
    }

    /// Collapsed single-`f64` Julian Date. Loses precision.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.jd.to_f64()
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert to another scale reachable without calibration data.
    ///
    /// Pairs that need a measured offset (anything touching UT1, and TT ↔
    /// TDB) do not implement [`ConvertTo`] and fail to compile here; use the
    /// scale-specific helpers instead.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> TimeResult<Time<T>>
    where
        S: ConvertTo<T>,
    {
        S::convert(self.jd).map(Time::<T>::wrap)
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// `days` later on the same scale.
    #[inline]
    pub fn add_days(self, days: Days) -> TimeResult<Self> {
        self.jd.add_days(days).map(Self::wrap)
    }

    /// `seconds` later on the same scale.
    #[inline]
    pub fn add_seconds(self, seconds: Seconds) -> TimeResult<Self> {
        self.jd.add_seconds(seconds).map(Self::wrap)
    }

    /// Earlier of the two instants.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Later of the two instants.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    // ── civil UTC ─────────────────────────────────────────────────────

    /// The instant of a civil UTC timestamp on this scale.
    pub fn from_utc(datetime: DateTime<Utc>) -> TimeResult<Self>
    where
        UTC: ConvertTo<S>,
    {
        let utc = Time::<UTC>::wrap(JulianDate::from_utc_datetime(datetime)?);
        utc.to::<S>()
    }

    /// The civil UTC timestamp of this instant, rounded to the nanosecond.
    pub fn to_utc(&self) -> TimeResult<DateTime<Utc>>
    where
        S: ConvertTo<UTC>,
    {
        self.to::<UTC>()?.jd.to_utc_datetime()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Calibrated helpers
// ═══════════════════════════════════════════════════════════════════════════

impl Time<UTC> {
    /// UT1 given the published `UT1 − UTC`.
    pub fn to_ut1(&self, ut1_minus_utc: Seconds) -> TimeResult<Time<UT1>> {
        convert::utc_to_ut1(self.jd, ut1_minus_utc).map(Time::wrap)
    }
}

impl Time<UT1> {
    /// UTC given the published `UT1 − UTC`.
    pub fn to_utc_with_offset(&self, ut1_minus_utc: Seconds) -> TimeResult<Time<UTC>> {
        convert::ut1_to_utc(self.jd, ut1_minus_utc).map(Time::wrap)
    }

    /// TT given `ΔT = TT − UT1`.
    pub fn to_tt(&self, tt_minus_ut1: Seconds) -> TimeResult<Time<TT>> {
        convert::ut1_to_tt(self.jd, tt_minus_ut1).map(Time::wrap)
    }
}

impl Time<TT> {
    /// UT1 given `ΔT = TT − UT1`.
    pub fn to_ut1(&self, tt_minus_ut1: Seconds) -> TimeResult<Time<UT1>> {
        convert::tt_to_ut1(self.jd, tt_minus_ut1).map(Time::wrap)
    }

    /// TDB from the barycentric series evaluated for `observer`.
    pub fn to_tdb(&self, observer: &Observer) -> TimeResult<Time<TDB>> {
        convert::tt_to_tdb_modelled(self.jd, observer).map(Time::wrap)
    }

    /// TDB from a measured `TDB − TT`.
    pub fn to_tdb_with_offset(&self, tdb_minus_tt: Seconds) -> TimeResult<Time<TDB>> {
        convert::tt_to_tdb(self.jd, tdb_minus_tt).map(Time::wrap)
    }
}

impl Time<TDB> {
    /// TT from the barycentric series evaluated for `observer`.
    pub fn to_tt(&self, observer: &Observer) -> TimeResult<Time<TT>> {
        convert::tdb_to_tt_modelled(self.jd, observer).map(Time::wrap)
    }

    /// TT from a measured `TDB − TT`.
    pub fn to_tt_with_offset(&self, tdb_minus_tt: Seconds) -> TimeResult<Time<TT>> {
        convert::tdb_to_tt(self.jd, tdb_minus_tt).map(Time::wrap)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} + {}",
            S::LABEL,
            self.jd.day_number(),
            self.jd.fraction_of_day()
        )
    }
}

/// Elapsed days between two instants on the same scale.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    #[inline]
    fn sub(self, rhs: Self) -> Days {
        Days::new(
            (self.jd.day_number() - rhs.jd.day_number())
                + (self.jd.fraction_of_day() - rhs.jd.fraction_of_day()),
        )
    }
}

impl<S: TimeScale> From<Time<S>> for JulianDate {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.jd
    }
}

impl<S: TimeScale> TryFrom<JulianDate> for Time<S> {
    type Error = TimeError;

    #[inline]
    fn try_from(jd: JulianDate) -> TimeResult<Self> {
        Self::from_julian_date(jd)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.jd.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let jd = JulianDate::deserialize(deserializer)?;
        Self::from_julian_date(jd).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SECONDS_PER_DAY, TT_MINUS_TAI_SECONDS};
    use crate::scales::{TAI, TCB, TCG};
    use chrono::TimeZone;

    const DAY: f64 = 2_453_750.5;

    #[test]
    fn new_tags_with_the_scale() {
        let tt = Time::<TT>::new(DAY, 0.25).unwrap();
        assert_eq!(tt.julian_date().standard(), TimeStandard::Tt);
        assert_eq!((tt.day_number(), tt.fraction_of_day()), (DAY, 0.25));
        assert!(Time::<TT>::new(DAY, 1.5).is_err());
    }

    #[test]
    fn from_julian_date_checks_the_tag() {
        let untagged = JulianDate::new(DAY, 0.5).unwrap();
        let tai = Time::<TAI>::from_julian_date(untagged).unwrap();
        assert_eq!(tai.julian_date().standard(), TimeStandard::Tai);

        let tt = JulianDate::with_standard(DAY, 0.5, TimeStandard::Tt).unwrap();
        assert_eq!(
            Time::<TAI>::from_julian_date(tt),
            Err(TimeError::WrongTimeStandard {
                expected: TimeStandard::Tai,
                actual: TimeStandard::Tt,
            })
        );
        assert!(Time::<TT>::try_from(tt).is_ok());
    }

    #[test]
    fn to_follows_the_conversion_graph() {
        let tai = Time::<TAI>::new(DAY, 0.5).unwrap();
        let tt = tai.to::<TT>().unwrap();
        assert_eq!(tt.julian_date().standard(), TimeStandard::Tt);
        let offset = tt.fraction_of_day() - tai.fraction_of_day();
        assert!((offset * SECONDS_PER_DAY - TT_MINUS_TAI_SECONDS).abs() < 1e-6);

        let same = tai.to::<TAI>().unwrap();
        assert_eq!(same, tai);

        let back = tt.to::<TCG>().unwrap().to::<TAI>().unwrap();
        assert!((back - tai).value().abs() < 1e-14);
    }

    #[test]
    fn tdb_and_tcb_are_linked_without_calibration() {
        let tdb = Time::<TDB>::new(DAY, 0.3).unwrap();
        let back = tdb.to::<TCB>().unwrap().to::<TDB>().unwrap();
        assert!((back - tdb).value().abs() < 1e-14);
    }

    #[test]
    fn calibrated_helpers_round_trip() {
        let dut1 = Seconds::new(0.3341);
        let utc = Time::<UTC>::new(DAY, 0.892_100_694).unwrap();
        let ut1 = utc.to_ut1(dut1).unwrap();
        let back = ut1.to_utc_with_offset(dut1).unwrap();
        assert!((back - utc).value().abs() < 1e-12);

        let delta_t = Seconds::new(64.8499);
        let tt = ut1.to_tt(delta_t).unwrap();
        assert!((tt.to_ut1(delta_t).unwrap() - ut1).value().abs() < 1e-12);

        let tdb = tt.to_tdb(&Observer::GEOCENTER).unwrap();
        let dtdb = (tdb.fraction_of_day() - tt.fraction_of_day()) * SECONDS_PER_DAY;
        assert!(dtdb.abs() < 2e-3, "{dtdb}");
        assert!((tdb.to_tt(&Observer::GEOCENTER).unwrap() - tt).value().abs() < 1e-12);

        let dtr = Seconds::new(-0.000_201);
        let fixed = tt.to_tdb_with_offset(dtr).unwrap();
        assert!((fixed.to_tt_with_offset(dtr).unwrap() - tt).value().abs() < 1e-12);
    }

    #[test]
    fn civil_utc_round_trip_through_tt() {
        let dt = Utc.with_ymd_and_hms(2006, 1, 15, 21, 24, 37).unwrap();
        let tt = Time::<TT>::from_utc(dt).unwrap();
        let utc_seconds = 21.0 * 3600.0 + 24.0 * 60.0 + 37.0;
        let offset = tt.fraction_of_day() * SECONDS_PER_DAY - utc_seconds;
        assert!((offset - 65.184).abs() < 1e-6, "{offset}");

        let back = tt.to_utc().unwrap();
        assert!((back - dt).num_microseconds().unwrap().abs() < 1);
    }

    #[test]
    fn ordering_and_min_max() {
        let a = Time::<TT>::new(DAY, 0.25).unwrap();
        let b = a.add_seconds(Seconds::new(1.0)).unwrap();
        assert!(a < b);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert!(((b - a).value() * SECONDS_PER_DAY - 1.0).abs() < 1e-9);

        let next = a.add_days(Days::new(1.0)).unwrap();
        assert_eq!(next.day_number(), DAY + 1.0);
    }

    #[test]
    fn display_uses_the_label() {
        let tcg = Time::<TCG>::new(DAY, 0.5).unwrap();
        assert_eq!(tcg.to_string(), "TCG 2453750.5 + 0.5");
    }
}
