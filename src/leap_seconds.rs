// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Leap-second table and the ΔAT (`TAI − UTC`) resolver.
//!
//! UTC began on 1960-01-01. Until 1972 it ran at a rate offset from TAI, so
//! the first fourteen table entries carry a [`DriftEra`]: ΔAT grows linearly
//! in MJD from the entry's base offset. From 1972 on every entry is a whole
//! number of seconds.
//!
//! Dates more than [`DUBIOUS_AFTER_YEARS`] past the last entry are still
//! answered (with the last offset) but flagged [`LeapSecondStatus::Dubious`]:
//! a leap second may have been announced since the table was compiled.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use qtty::Seconds;

use crate::calendar::{date_to_julian_day, gregorian_to_mjd};
use crate::constants::{MJD_ZERO_POINT, SECONDS_PER_DAY};
use crate::error::{TimeError, TimeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `TAI − UTC` in force from the first day of `year-month`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LeapSecondRecord {
    pub year: i32,
    pub month: u32,
    pub offset_seconds: f64,
}

/// Linear drift applied on top of a pre-1972 record:
/// `offset + (mjd − reference_mjd) × rate_per_day`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DriftEra {
    pub reference_mjd: f64,
    pub rate_per_day: f64,
}

const fn record(year: i32, month: u32, offset_seconds: f64) -> LeapSecondRecord {
    LeapSecondRecord {
        year,
        month,
        offset_seconds,
    }
}

const fn drift(reference_mjd: f64, rate_per_day: f64) -> DriftEra {
    DriftEra {
        reference_mjd,
        rate_per_day,
    }
}

#[rustfmt::skip]
const LEAP_SECONDS: [LeapSecondRecord; 42] = [
    record(1960,  1,  1.417_818_0),
    record(1961,  1,  1.422_818_0),
    record(1961,  8,  1.372_818_0),
    record(1962,  1,  1.845_858_0),
    record(1963, 11,  1.945_858_0),
    record(1964,  1,  3.240_130_0),
    record(1964,  4,  3.340_130_0),
    record(1964,  9,  3.440_130_0),
    record(1965,  1,  3.540_130_0),
    record(1965,  3,  3.640_130_0),
    record(1965,  7,  3.740_130_0),
    record(1965,  9,  3.840_130_0),
    record(1966,  1,  4.313_170_0),
    record(1968,  2,  4.213_170_0),
    record(1972,  1, 10.0),
    record(1972,  7, 11.0),
    record(1973,  1, 12.0),
    record(1974,  1, 13.0),
    record(1975,  1, 14.0),
    record(1976,  1, 15.0),
    record(1977,  1, 16.0),
    record(1978,  1, 17.0),
    record(1979,  1, 18.0),
    record(1980,  1, 19.0),
    record(1981,  7, 20.0),
    record(1982,  7, 21.0),
    record(1983,  7, 22.0),
    record(1985,  7, 23.0),
    record(1988,  1, 24.0),
    record(1990,  1, 25.0),
    record(1991,  1, 26.0),
    record(1992,  7, 27.0),
    record(1993,  7, 28.0),
    record(1994,  7, 29.0),
    record(1996,  1, 30.0),
    record(1997,  7, 31.0),
    record(1999,  1, 32.0),
    record(2006,  1, 33.0),
    record(2009,  1, 34.0),
    record(2012,  7, 35.0),
    record(2015,  7, 36.0),
    record(2017,  1, 37.0),
];

/// One entry per pre-1972 record, in the same order.
#[rustfmt::skip]
const DRIFT_ERAS: [DriftEra; 14] = [
    drift(37_300.0, 0.001_296_0),
    drift(37_300.0, 0.001_296_0),
    drift(37_300.0, 0.001_296_0),
    drift(37_665.0, 0.001_123_2),
    drift(37_665.0, 0.001_123_2),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(38_761.0, 0.001_296_0),
    drift(39_126.0, 0.002_592_0),
    drift(39_126.0, 0.002_592_0),
];

/// Years past the last table entry after which ΔAT is flagged dubious.
pub const DUBIOUS_AFTER_YEARS: i32 = 5;

/// The compiled-in leap-second table, oldest first.
#[inline]
pub fn leap_seconds() -> &'static [LeapSecondRecord] {
    &LEAP_SECONDS
}

/// Drift eras of the pre-1972 records; `drift_eras()[i]` belongs to
/// `leap_seconds()[i]`.
#[inline]
pub fn drift_eras() -> &'static [DriftEra] {
    &DRIFT_ERAS
}

/// Trustworthiness of a ΔAT value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LeapSecondStatus {
    Reliable,
    /// Extrapolated beyond the table horizon.
    Dubious,
}

/// `TAI − UTC` at some instant, with its [`LeapSecondStatus`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DeltaAt {
    seconds: Seconds,
    status: LeapSecondStatus,
}

impl DeltaAt {
    #[inline]
    pub const fn seconds(&self) -> Seconds {
        self.seconds
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.seconds.value()
    }

    #[inline]
    pub const fn status(&self) -> LeapSecondStatus {
        self.status
    }

    #[inline]
    pub fn is_dubious(&self) -> bool {
        self.status == LeapSecondStatus::Dubious
    }
}

/// `TAI − UTC` for the UTC instant `fraction_of_day` into `year-month-day`.
///
/// # Errors
///
/// * [`TimeError::InvalidFractionOfDay`] if `fraction_of_day ∉ [0, 1]`,
/// * [`TimeError::InvalidCalendarDate`] if the date does not exist,
/// * [`TimeError::PreUtcDate`] before 1960-01-01.
pub fn delta_at(year: i32, month: u32, day: u32, fraction_of_day: f64) -> TimeResult<DeltaAt> {
    if !(0.0..=1.0).contains(&fraction_of_day) {
        return Err(TimeError::InvalidFractionOfDay(fraction_of_day));
    }
    let mjd = gregorian_to_mjd(year, month, day)?;
    let first = &LEAP_SECONDS[0];
    if (year, month) < (first.year, first.month) {
        return Err(TimeError::PreUtcDate { year, month });
    }

    let (seconds, status) = resolve(year, month, mjd + fraction_of_day);
    if status == LeapSecondStatus::Dubious {
        tracing::debug!(
            year = year,
            month = month,
            day = day,
            seconds = seconds,
            "ΔAT extrapolated beyond the leap-second table"
        );
    }
    Ok(DeltaAt {
        seconds: Seconds::new(seconds),
        status,
    })
}

/// [`delta_at`] for a `chrono` civil date.
#[inline]
pub fn delta_at_for_date(date: NaiveDate, fraction_of_day: f64) -> TimeResult<DeltaAt> {
    delta_at(date.year(), date.month(), date.day(), fraction_of_day)
}

/// [`delta_at`] for a `chrono` UTC timestamp.
///
/// A timestamp inside an inserted leap second counts as the end of its day.
pub fn delta_at_for_datetime(datetime: DateTime<Utc>) -> TimeResult<DeltaAt> {
    let time = datetime.time();
    let elapsed = f64::from(time.num_seconds_from_midnight())
        + f64::from(time.nanosecond()) / 1e9;
    let fraction = (elapsed / SECONDS_PER_DAY).min(1.0);
    delta_at_for_date(datetime.date_naive(), fraction)
}

/// Strict ΔAT in seconds for `fraction_of_day` into `date`.
#[inline]
pub(crate) fn tai_minus_utc(date: NaiveDate, fraction_of_day: f64) -> TimeResult<f64> {
    delta_at_for_date(date, fraction_of_day).map(|d| d.value())
}

/// ΔAT at 0h of `date` that never fails: dates before 1960 extrapolate the
/// first record's drift backwards. Used only to look up neighbouring days.
pub(crate) fn tai_minus_utc_extrapolated(date: NaiveDate) -> f64 {
    let mjd = date_to_julian_day(date) - MJD_ZERO_POINT;
    resolve(date.year(), date.month(), mjd).0
}

/// Length of the UTC day `date` in UTC seconds: 86 400 plus any ΔAT step
/// at its end. Never fails; dates before 1960 have no steps.
pub(crate) fn utc_day_length(date: NaiveDate) -> f64 {
    let mjd = date_to_julian_day(date) - MJD_ZERO_POINT;
    let dat_0h = resolve(date.year(), date.month(), mjd).0;
    let dat_12h = resolve(date.year(), date.month(), mjd + 0.5).0;
    let dat_24h = match date.succ_opt() {
        Some(next) => resolve(next.year(), next.month(), mjd + 1.0).0,
        None => 2.0 * dat_12h - dat_0h,
    };
    SECONDS_PER_DAY + dat_24h - (2.0 * dat_12h - dat_0h)
}

/// Base offset plus drift of the last record in force at `year-month`.
fn resolve(year: i32, month: u32, mjd: f64) -> (f64, LeapSecondStatus) {
    let key = month_key(year, month);
    let index = LEAP_SECONDS
        .iter()
        .rposition(|r| key >= month_key(r.year, r.month))
        .unwrap_or(0);

    let record = &LEAP_SECONDS[index];
    let mut seconds = record.offset_seconds;
    if let Some(era) = DRIFT_ERAS.get(index) {
        seconds += (mjd - era.reference_mjd) * era.rate_per_day;
    }

    let last_year = LEAP_SECONDS[LEAP_SECONDS.len() - 1].year;
    let status = if year > last_year + DUBIOUS_AFTER_YEARS {
        LeapSecondStatus::Dubious
    } else {
        LeapSecondStatus::Reliable
    };
    (seconds, status)
}

#[inline]
fn month_key(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dat(y: i32, m: u32, d: u32) -> f64 {
        delta_at(y, m, d, 0.0).unwrap().value()
    }

    #[test]
    fn integer_era_values() {
        assert_eq!(dat(2003, 6, 1), 32.0);
        assert_eq!(dat(2008, 1, 17), 33.0);
        assert_eq!(dat(2017, 9, 1), 37.0);
        assert_eq!(dat(1972, 1, 1), 10.0);
        assert_eq!(dat(1972, 6, 30), 10.0);
        assert_eq!(dat(1972, 7, 1), 11.0);
    }

    #[test]
    fn step_happens_at_midnight_of_the_first_day() {
        assert_eq!(delta_at(2016, 12, 31, 1.0).unwrap().value(), 36.0);
        assert_eq!(dat(2017, 1, 1), 37.0);
    }

    #[test]
    fn pre_1972_drift() {
        // 1960-01-01 is MJD 36 934.
        let expected = 1.417_818 + (36_934.0 - 37_300.0) * 0.001_296;
        assert!((dat(1960, 1, 1) - expected).abs() < 1e-12);

        let expected = 4.213_17 + (41_316.0 - 39_126.0) * 0.002_592;
        assert!((dat(1971, 12, 31) - expected).abs() < 1e-12);

        let noon = delta_at(1968, 6, 1, 0.5).unwrap().value();
        let midnight = dat(1968, 6, 1);
        assert!((noon - midnight - 0.5 * 0.002_592).abs() < 1e-12);
    }

    #[test]
    fn input_validation() {
        assert_eq!(
            delta_at(2000, 1, 1, 1.5),
            Err(TimeError::InvalidFractionOfDay(1.5))
        );
        assert!(matches!(
            delta_at(2000, 1, 1, f64::NAN),
            Err(TimeError::InvalidFractionOfDay(_))
        ));
        assert_eq!(
            delta_at(2001, 2, 29, 0.0),
            Err(TimeError::InvalidCalendarDate {
                year: 2001,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            delta_at(1959, 12, 31, 0.0),
            Err(TimeError::PreUtcDate {
                year: 1959,
                month: 12
            })
        );
    }

    #[test]
    fn dubious_beyond_horizon() {
        let last = leap_seconds().last().unwrap().year;
        let edge = delta_at(last + DUBIOUS_AFTER_YEARS, 12, 31, 0.0).unwrap();
        assert_eq!(edge.status(), LeapSecondStatus::Reliable);

        let beyond = delta_at(last + DUBIOUS_AFTER_YEARS + 1, 1, 1, 0.0).unwrap();
        assert!(beyond.is_dubious());
        assert_eq!(beyond.value(), 37.0);
    }

    #[test]
    fn table_shape() {
        assert_eq!(leap_seconds().len(), 42);
        assert_eq!(drift_eras().len(), 14);
        assert_eq!(leap_seconds()[drift_eras().len()].year, 1972);
        for pair in leap_seconds().windows(2) {
            assert!((pair[0].year, pair[0].month) < (pair[1].year, pair[1].month));
        }
    }

    #[test]
    fn chrono_overloads_agree() {
        let date = NaiveDate::from_ymd_opt(1965, 3, 15).unwrap();
        assert_eq!(
            delta_at_for_date(date, 0.25).unwrap(),
            delta_at(1965, 3, 15, 0.25).unwrap()
        );

        let dt = Utc.with_ymd_and_hms(1965, 3, 15, 6, 0, 0).unwrap();
        let a = delta_at_for_datetime(dt).unwrap().value();
        let b = delta_at(1965, 3, 15, 0.25).unwrap().value();
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn leap_second_timestamp_clamps_to_end_of_day() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
            .unwrap()
            .and_utc();
        assert_eq!(delta_at_for_datetime(leap).unwrap().value(), 36.0);
    }

    #[test]
    fn day_lengths() {
        let day = |y, m, d| utc_day_length(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(day(2016, 12, 31), 86_401.0);
        assert_eq!(day(2015, 6, 30), 86_401.0);
        assert_eq!(day(2016, 12, 30), 86_400.0);
        assert_eq!(day(2017, 1, 1), 86_400.0);
        assert!((day(1968, 6, 1) - 86_400.0).abs() < 1e-9);
        // 1961-08-01 stepped UTC back by 50 ms.
        assert!((day(1961, 7, 31) - 86_399.95).abs() < 1e-9);
        assert!((day(1950, 1, 1) - 86_400.0).abs() < 1e-9);
    }

    #[test]
    fn extrapolated_lookup_never_fails() {
        let before = NaiveDate::from_ymd_opt(1959, 12, 31).unwrap();
        let value = tai_minus_utc_extrapolated(before);
        let expected = 1.417_818 + (36_933.0 - 37_300.0) * 0.001_296;
        assert!((value - expected).abs() < 1e-12);

        let modern = NaiveDate::from_ymd_opt(2020, 5, 5).unwrap();
        assert_eq!(tai_minus_utc_extrapolated(modern), 37.0);
        assert_eq!(tai_minus_utc(modern, 0.0), Ok(37.0));
    }
}
