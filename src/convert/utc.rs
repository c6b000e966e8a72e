// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Edges through UTC, driven by the leap-second table.
//!
//! A UTC Julian Date is a *quasi* Julian Date: on a day that ends with a
//! leap second the fraction of day spans 86 401 SI seconds, so
//! 23:59:60.5 is `(86_400.5 / 86_401)` of the way through the day. Before
//! 1972 the UTC second itself was slightly longer than the SI second.

use qtty::Seconds;

use super::calibrated::tai_to_ut1;
use crate::calendar::{date_to_julian_day, julian_day_to_gregorian};
use crate::constants::SECONDS_PER_DAY;
use crate::error::{TimeError, TimeResult};
use crate::julian_date::JulianDate;
use crate::leap_seconds::{tai_minus_utc, tai_minus_utc_extrapolated};
use crate::standard::TimeStandard;

/// Fixed-point iterations used to invert [`utc_to_tai`].
const TAI_TO_UTC_ITERATIONS: usize = 3;

/// Order the parts larger-magnitude first, remembering whether they were.
#[inline]
fn big_first(d1: f64, d2: f64) -> (f64, f64, bool) {
    if d1.abs() >= d2.abs() {
        (d1, d2, true)
    } else {
        (d2, d1, false)
    }
}

#[inline]
fn restore(big: f64, small: f64, was_big_first: bool) -> (f64, f64) {
    if was_big_first {
        (big, small)
    } else {
        (small, big)
    }
}

pub fn utc_to_tai(utc: JulianDate) -> TimeResult<JulianDate> {
    utc.standard().ensure(TimeStandard::Utc)?;
    let (d1, d2) = utc_to_tai_parts(utc.day_number(), utc.fraction_of_day())?;
    JulianDate::from_parts(d1, d2, TimeStandard::Tai)
}

/// UTC → TAI on a raw two-part date, keeping the caller's split.
fn utc_to_tai_parts(d1: f64, d2: f64) -> TimeResult<(f64, f64)> {
    let (u1, u2, ordered) = big_first(d1, d2);
    let (today, fraction) = julian_day_to_gregorian(u1, u2)?;
    let tomorrow = today.succ_opt().ok_or(TimeError::UnrepresentableDateTime)?;

    let dat_0h = tai_minus_utc(today, 0.0)?;
    let dat_12h = tai_minus_utc(today, 0.5)?;
    let dat_24h = tai_minus_utc(tomorrow, 0.0)?;

    // Pre-1972 drift over the day, and any step at its end.
    let drift = 2.0 * (dat_12h - dat_0h);
    let jump = dat_24h - (dat_0h + drift);
    if jump != 0.0 {
        tracing::trace!(%today, jump, "UTC day ends with a ΔAT step");
    }

    // Undo the stretch of a leap day, then convert UTC seconds to SI seconds.
    let fraction = fraction * (SECONDS_PER_DAY + jump) / SECONDS_PER_DAY;
    let fraction = fraction * (SECONDS_PER_DAY + drift) / SECONDS_PER_DAY;

    let small = (date_to_julian_day(today) - u1) + fraction + dat_0h / SECONDS_PER_DAY;
    Ok(restore(u1, small, ordered))
}

/// Inverts [`utc_to_tai`] by fixed-point iteration seeded with the TAI date.
pub fn tai_to_utc(tai: JulianDate) -> TimeResult<JulianDate> {
    tai.standard().ensure(TimeStandard::Tai)?;
    let (a1, a2, ordered) = big_first(tai.day_number(), tai.fraction_of_day());

    let u1 = a1;
    let mut u2 = a2;
    for iteration in 0..TAI_TO_UTC_ITERATIONS {
        let (g1, g2) = utc_to_tai_parts(u1, u2)?;
        u2 += a1 - g1;
        u2 += a2 - g2;
        tracing::trace!(iteration, residual = (a1 - g1) + (a2 - g2), "TAI → UTC");
    }

    let (d1, d2) = restore(u1, u2, ordered);
    JulianDate::from_parts(d1, d2, TimeStandard::Utc)
}

/// UTC from UT1 given `UT1 − UTC`.
///
/// Near a leap second `ut1_minus_utc` is ambiguous by one second; it is
/// taken as the value *before* the step and ramped across the UTC day that
/// ends with it, so the caller may pass either side's value.
pub fn ut1_to_utc(ut1: JulianDate, ut1_minus_utc: Seconds) -> TimeResult<JulianDate> {
    ut1.standard().ensure(TimeStandard::Ut1)?;
    let (u1, u2, ordered) = big_first(ut1.day_number(), ut1.fraction_of_day());
    let mut duts = ut1_minus_utc.value();

    // Look for a ΔAT step between the day before and three days after.
    let mut previous: Option<f64> = None;
    for offset in -1..=3 {
        let (date, _) = julian_day_to_gregorian(u1, u2 + f64::from(offset))?;
        let dats2 = if offset == 0 {
            tai_minus_utc(date, 0.0)?
        } else {
            tai_minus_utc_extrapolated(date)
        };
        let dats1 = previous.unwrap_or(dats2);
        let step = dats2 - dats1;

        if step.abs() >= 0.5 {
            tracing::debug!(%date, step, "leap second near UT1 instant");

            // Use the pre-step UT1 − UTC.
            if step * duts >= 0.0 {
                duts -= step;
            }

            // UT1 at the start of the UTC day that ends in the step.
            let us1 = date_to_julian_day(date);
            let us2 = -1.0 + duts / SECONDS_PER_DAY;

            let elapsed = (u1 - us1) + (u2 - us2);
            if elapsed > 0.0 {
                let fd = elapsed * SECONDS_PER_DAY / (SECONDS_PER_DAY + step);
                duts += step * fd.min(1.0);
            }
            break;
        }
        previous = Some(dats2);
    }

    let (d1, d2) = restore(u1, u2 - duts / SECONDS_PER_DAY, ordered);
    JulianDate::from_parts(d1, d2, TimeStandard::Utc)
}

/// UT1 from UTC given `UT1 − UTC`.
///
/// Unlike [`ut1_to_utc`], the offset is applied as given: on or before a
/// leap day it must be the pre-step value, or the result is off by the
/// full second.
pub fn utc_to_ut1(utc: JulianDate, ut1_minus_utc: Seconds) -> TimeResult<JulianDate> {
    utc.standard().ensure(TimeStandard::Utc)?;
    let (date, _) = julian_day_to_gregorian(utc.day_number(), utc.fraction_of_day())?;
    let dat = tai_minus_utc(date, 0.0)?;
    let tai = utc_to_tai(utc)?;
    tai_to_ut1(tai, Seconds::new(ut1_minus_utc.value() - dat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::gregorian_to_julian_day;

    const DAY: f64 = 2_453_750.5;

    fn tagged(day: f64, fraction: f64, standard: TimeStandard) -> JulianDate {
        JulianDate::with_standard(day, fraction, standard).unwrap()
    }

    fn assert_close(jd: JulianDate, day: f64, fraction: f64) {
        assert_eq!(jd.day_number(), day, "{jd}");
        assert!(
            (jd.fraction_of_day() - fraction).abs() < 1e-12,
            "{} vs {fraction}",
            jd.fraction_of_day()
        );
    }

    #[test]
    fn utc_tai_reference() {
        let tai = utc_to_tai(tagged(DAY, 0.892_100_694, TimeStandard::Utc)).unwrap();
        assert_eq!(tai.standard(), TimeStandard::Tai);
        assert_close(tai, DAY, 0.892_482_638_444_444_444_4);

        let utc = tai_to_utc(tagged(DAY, 0.892_482_639, TimeStandard::Tai)).unwrap();
        assert_eq!(utc.standard(), TimeStandard::Utc);
        assert_close(utc, DAY, 0.892_100_694_555_555_555_6);
    }

    #[test]
    fn ut1_utc_reference() {
        let dut1 = Seconds::new(0.3341);
        let utc = ut1_to_utc(tagged(DAY, 0.892_104_561, TimeStandard::Ut1), dut1).unwrap();
        assert_close(utc, DAY, 0.892_100_694_101_851_851_9);

        let ut1 = utc_to_ut1(tagged(DAY, 0.892_100_694, TimeStandard::Utc), dut1).unwrap();
        assert_eq!(ut1.standard(), TimeStandard::Ut1);
        assert_close(ut1, DAY, 0.892_104_560_898_148_148_1);
    }

    #[test]
    fn leap_second_is_representable() {
        let leap_day = gregorian_to_julian_day(2016, 12, 31).unwrap();
        // 23:59:60.5 on a 86 401 s day.
        let utc = tagged(leap_day, 86_400.5 / 86_401.0, TimeStandard::Utc);
        let tai = utc_to_tai(utc).unwrap();
        // 2017-01-01T00:00:36.5 TAI.
        assert_close(tai, leap_day + 1.0, 36.5 / SECONDS_PER_DAY);

        let back = tai_to_utc(tai).unwrap();
        assert_close(back, leap_day, 86_400.5 / 86_401.0);
    }

    #[test]
    fn leap_day_keeps_elapsed_si_seconds() {
        let leap_day = gregorian_to_julian_day(2016, 12, 31).unwrap();
        let start = utc_to_tai(tagged(leap_day, 0.0, TimeStandard::Utc)).unwrap();
        let end = utc_to_tai(tagged(leap_day + 1.0, 0.0, TimeStandard::Utc)).unwrap();
        let elapsed = end.days_since(&start).unwrap().value() * SECONDS_PER_DAY;
        assert!((elapsed - 86_401.0).abs() < 1e-6, "{elapsed}");
    }

    #[test]
    fn pre_1972_utc_seconds_are_stretched() {
        let day = gregorian_to_julian_day(1968, 6, 1).unwrap();
        let start = utc_to_tai(tagged(day, 0.0, TimeStandard::Utc)).unwrap();
        let end = utc_to_tai(tagged(day, 0.5, TimeStandard::Utc)).unwrap();
        let elapsed = end.days_since(&start).unwrap().value() * SECONDS_PER_DAY;
        assert!((elapsed - (43_200.0 + 0.5 * 0.002_592)).abs() < 1e-6, "{elapsed}");

        let back = tai_to_utc(end).unwrap();
        assert_close(back, day, 0.5);
    }

    #[test]
    fn ut1_to_utc_after_a_leap_second() {
        // Noon on 2017-01-01 with the post-step UT1 − UTC.
        let day = gregorian_to_julian_day(2017, 1, 1).unwrap();
        let utc = ut1_to_utc(tagged(day, 0.5, TimeStandard::Ut1), Seconds::new(0.4)).unwrap();
        assert_close(utc, day, 0.5 - 0.4 / SECONDS_PER_DAY);
    }

    #[test]
    fn ut1_to_utc_before_a_leap_second() {
        // Noon on 2016-12-30 with the pre-step UT1 − UTC.
        let day = gregorian_to_julian_day(2016, 12, 30).unwrap();
        let utc = ut1_to_utc(tagged(day, 0.5, TimeStandard::Ut1), Seconds::new(-0.6)).unwrap();
        assert_close(utc, day, 0.5 + 0.6 / SECONDS_PER_DAY);
    }

    #[test]
    fn ut1_round_trip_across_leap_seconds() {
        // Each day gets the UT1 − UTC in force on its side of the step.
        let days = [
            ((2015, 6, 30), -0.6),
            ((2015, 7, 1), 0.4),
            ((2016, 12, 30), -0.6),
            ((2016, 12, 31), -0.6),
            ((2017, 1, 1), 0.4),
        ];
        for ((year, month, dom), dut1) in days {
            let day = gregorian_to_julian_day(year, month, dom).unwrap();
            let dut1 = Seconds::new(dut1);
            for fraction in [0.1, 0.5, 0.999_99] {
                let utc = tagged(day, fraction, TimeStandard::Utc);
                let back = ut1_to_utc(utc_to_ut1(utc, dut1).unwrap(), dut1).unwrap();
                assert_eq!(back.standard(), TimeStandard::Utc);
                let error = back.days_since(&utc).unwrap().value();
                assert!(error.abs() < 1e-9, "{year}-{month}-{dom} {fraction}: {error}");
            }
        }
    }

    #[test]
    fn post_step_offset_on_the_leap_day_misses_by_a_second() {
        let day = gregorian_to_julian_day(2016, 12, 31).unwrap();
        let dut1 = Seconds::new(0.4);
        let utc = tagged(day, 0.5, TimeStandard::Utc);
        let back = ut1_to_utc(utc_to_ut1(utc, dut1).unwrap(), dut1).unwrap();
        let error = back.days_since(&utc).unwrap().value() * SECONDS_PER_DAY;
        assert!((error - (1.0 - 1.0 / 86_401.0)).abs() < 1e-4, "{error}");
    }

    #[test]
    fn utc_before_1960_is_rejected() {
        let day = gregorian_to_julian_day(1959, 6, 1).unwrap();
        assert_eq!(
            utc_to_tai(tagged(day, 0.5, TimeStandard::Utc)),
            Err(TimeError::PreUtcDate {
                year: 1959,
                month: 6
            })
        );
    }

    #[test]
    fn wrong_tag_is_rejected() {
        let tt = tagged(DAY, 0.5, TimeStandard::Tt);
        assert!(utc_to_tai(tt).is_err());
        assert!(tai_to_utc(tt).is_err());
        assert!(ut1_to_utc(tt, Seconds::new(0.0)).is_err());
        assert!(utc_to_ut1(tt, Seconds::new(0.0)).is_err());
    }
}
