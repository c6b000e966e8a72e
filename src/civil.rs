// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `chrono::DateTime<Utc>` ↔ UTC [`JulianDate`].
//!
//! A UTC day lasts 86 400 UTC seconds plus any leap second at its end, and
//! the fraction of day is measured against that length. chrono spells the
//! inserted second as `23:59:59` with a nanosecond field of `10⁹` or more,
//! which lands between `86_400 / 86_401` and `1` of the way through the day.

use chrono::{DateTime, NaiveTime, Timelike, Utc};

use crate::calendar::{date_to_julian_day, julian_day_to_gregorian};
use crate::constants::SECONDS_PER_DAY;
use crate::error::{TimeError, TimeResult};
use crate::julian_date::JulianDate;
use crate::leap_seconds::utc_day_length;
use crate::standard::TimeStandard;

const NANOS_PER_SECOND: f64 = 1e9;

impl JulianDate {
    /// The UTC Julian Date of a civil timestamp.
    pub fn from_utc_datetime(datetime: DateTime<Utc>) -> TimeResult<Self> {
        let date = datetime.date_naive();
        let time = datetime.time();
        let elapsed = f64::from(time.num_seconds_from_midnight())
            + f64::from(time.nanosecond()) / NANOS_PER_SECOND;
        let fraction = elapsed / utc_day_length(date);
        Self::from_parts(date_to_julian_day(date), fraction, TimeStandard::Utc)
    }

    /// The civil timestamp of a UTC (or untagged) Julian Date, rounded to
    /// the nanosecond.
    pub fn to_utc_datetime(&self) -> TimeResult<DateTime<Utc>> {
        self.standard().ensure(TimeStandard::Utc)?;
        let (date, fraction) = julian_day_to_gregorian(self.day_number(), self.fraction_of_day())?;
        let day_length = utc_day_length(date);
        let seconds = fraction * day_length;

        let mut whole = seconds.floor();
        let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round();
        if nanos >= NANOS_PER_SECOND {
            whole += 1.0;
            nanos -= NANOS_PER_SECOND;
        }

        if whole < SECONDS_PER_DAY {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(whole as u32, nanos as u32)
                .ok_or(TimeError::UnrepresentableDateTime)?;
            return Ok(date.and_time(time).and_utc());
        }
        if day_length <= SECONDS_PER_DAY {
            // Rounded up to the next midnight.
            let next = date.succ_opt().ok_or(TimeError::UnrepresentableDateTime)?;
            return Ok(next.and_time(NaiveTime::MIN).and_utc());
        }
        // Inside the leap second: chrono's 23:59:59 + ≥ 1 s.
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, (nanos + NANOS_PER_SECOND) as u32)
            .ok_or(TimeError::UnrepresentableDateTime)?;
        Ok(date.and_time(time).and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::gregorian_to_julian_day;
    use chrono::{NaiveDate, TimeZone};

    fn leap_instant(nanos: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, nanos)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn ordinary_day() {
        let dt = Utc.with_ymd_and_hms(2006, 1, 15, 12, 0, 0).unwrap();
        let jd = JulianDate::from_utc_datetime(dt).unwrap();
        assert_eq!(jd.standard(), TimeStandard::Utc);
        assert_eq!(jd.parts(), (2_453_750.5, 0.5));
        assert_eq!(jd.to_utc_datetime().unwrap(), dt);
    }

    #[test]
    fn leap_second_maps_inside_its_day() {
        let jd = JulianDate::from_utc_datetime(leap_instant(1_500_000_000)).unwrap();
        let leap_day = gregorian_to_julian_day(2016, 12, 31).unwrap();
        assert_eq!(jd.day_number(), leap_day);
        assert!((jd.fraction_of_day() - 86_400.5 / 86_401.0).abs() < 1e-15);

        let back = jd.to_utc_datetime().unwrap();
        assert_eq!(back, leap_instant(1_500_000_000));
        assert_eq!(back.time().nanosecond(), 1_500_000_000);
    }

    #[test]
    fn last_ordinary_second_of_a_leap_day() {
        let dt = leap_instant(250_000_000);
        let jd = JulianDate::from_utc_datetime(dt).unwrap();
        assert!((jd.fraction_of_day() - 86_399.25 / 86_401.0).abs() < 1e-15);
        assert_eq!(jd.to_utc_datetime().unwrap(), dt);
    }

    #[test]
    fn sub_second_round_trip() {
        let dt = Utc
            .with_ymd_and_hms(1999, 12, 31, 23, 59, 59)
            .unwrap()
            .with_nanosecond(123_456_000)
            .unwrap();
        let back = JulianDate::from_utc_datetime(dt)
            .unwrap()
            .to_utc_datetime()
            .unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn rounding_up_to_midnight_rolls_the_date() {
        let jd = JulianDate::with_standard(2_453_750.5, 1.0 - 1e-15, TimeStandard::Utc).unwrap();
        let dt = jd.to_utc_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2006, 1, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn only_utc_dates_become_civil_time() {
        let tai = JulianDate::with_standard(2_453_750.5, 0.5, TimeStandard::Tai).unwrap();
        assert!(matches!(
            tai.to_utc_datetime(),
            Err(TimeError::WrongTimeStandard { .. })
        ));

        let untagged = JulianDate::new(2_453_750.5, 0.25).unwrap();
        let dt = untagged.to_utc_datetime().unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2006, 1, 15, 6, 0, 0).unwrap());
    }
}
