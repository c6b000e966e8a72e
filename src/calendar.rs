// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar ↔ Julian Day, backed by `chrono`.

use chrono::{Datelike, NaiveDate};

use crate::constants::MJD_ZERO_POINT;
use crate::error::{TimeError, TimeResult};
use crate::julian_date::normalize;

/// `JD(0h) − num_days_from_ce()`: 0001-01-01 (CE day 1) starts at JD 1 721 425.5.
const CE_DAY_OFFSET: f64 = 1_721_424.5;

/// Julian Day at 0h of a civil date.
#[inline]
pub fn date_to_julian_day(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce()) + CE_DAY_OFFSET
}

/// Julian Day at 0h of `year-month-day`, a half-integer.
pub fn gregorian_to_julian_day(year: i32, month: u32, day: u32) -> TimeResult<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeError::InvalidCalendarDate { year, month, day })?;
    Ok(date_to_julian_day(date))
}

/// Modified Julian Day at 0h of `year-month-day`.
#[inline]
pub fn gregorian_to_mjd(year: i32, month: u32, day: u32) -> TimeResult<f64> {
    Ok(gregorian_to_julian_day(year, month, day)? - MJD_ZERO_POINT)
}

/// Civil date and fraction of day of the two-part Julian Date `d1 + d2`.
///
/// The parts may be split anyhow; they are renormalised first.
pub fn julian_day_to_gregorian(d1: f64, d2: f64) -> TimeResult<(NaiveDate, f64)> {
    let (day_number, fraction) = normalize(d1, d2);
    if !day_number.is_finite() || !fraction.is_finite() {
        return Err(TimeError::UnrepresentableDateTime);
    }
    let ce_days = day_number - CE_DAY_OFFSET;
    if ce_days < f64::from(i32::MIN) || ce_days > f64::from(i32::MAX) {
        return Err(TimeError::UnrepresentableDateTime);
    }
    let date = NaiveDate::from_num_days_from_ce_opt(ce_days as i32)
        .ok_or(TimeError::UnrepresentableDateTime)?;
    Ok((date, fraction))
}
