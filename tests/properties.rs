use std::f64::consts::PI;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use qtty::Seconds;
use timescale::{
    convert, delta_at_for_date, JulianDate, Observer, TimeError, TimeResult, TimeStandard,
};

const JD_1972: f64 = 2_441_317.5;
const JD_2030: f64 = 2_462_502.5;
/// 1999-01-03 .. 2005-12-25: no leap second within reach of the UT1 scan.
const JD_1999: f64 = 2_451_181.5;
const JD_2005_12_25: f64 = 2_453_729.5;

fn date(day: f64, fraction: f64, standard: TimeStandard) -> JulianDate {
    JulianDate::with_standard(day, fraction, standard).unwrap()
}

fn assert_same_instant(a: JulianDate, b: JulianDate) {
    let da = (a.day_number() - b.day_number()) + (a.fraction_of_day() - b.fraction_of_day());
    assert!(da.abs() < 1e-9, "{a} vs {b}");
    assert_eq!(a.standard(), b.standard());
}

fn assert_invariants(jd: &JulianDate) {
    assert_eq!(jd.day_number() - jd.day_number().floor(), 0.5, "{jd}");
    assert!((0.0..1.0).contains(&jd.fraction_of_day()), "{jd}");
}

fn days_in(start: f64, end: f64) -> impl Strategy<Value = f64> {
    (0..(end - start) as u32).prop_map(move |offset| start + f64::from(offset))
}

proptest! {
    #[test]
    fn shifted_dates_keep_their_invariants(
        day in days_in(JD_1972, JD_2030),
        fraction in 0.0f64..1.0,
        seconds in -1e7f64..1e7,
    ) {
        let jd = date(day, fraction, TimeStandard::Tt);
        assert_invariants(&jd);
        let shifted = jd.add_seconds(Seconds::new(seconds)).unwrap();
        assert_invariants(&shifted);
        let elapsed = shifted.days_since(&jd).unwrap().value() * 86_400.0;
        prop_assert!((elapsed - seconds).abs() < 1e-3);
    }

    #[test]
    fn single_f64_split_keeps_invariants(value in 0.5f64..1e9) {
        let jd = JulianDate::from_date(value).unwrap();
        assert_invariants(&jd);
        prop_assert_eq!(jd.day_number() + jd.fraction_of_day(), value);
    }

    #[test]
    fn fixed_offset_edges_invert(
        day in days_in(JD_1972, JD_2030),
        fraction in 0.0f64..1.0,
    ) {
        let tai = date(day, fraction, TimeStandard::Tai);
        assert_same_instant(convert::tt_to_tai(convert::tai_to_tt(tai).unwrap()).unwrap(), tai);

        let tt = date(day, fraction, TimeStandard::Tt);
        assert_same_instant(convert::tcg_to_tt(convert::tt_to_tcg(tt).unwrap()).unwrap(), tt);

        let tdb = date(day, fraction, TimeStandard::Tdb);
        assert_same_instant(convert::tcb_to_tdb(convert::tdb_to_tcb(tdb).unwrap()).unwrap(), tdb);
    }

    #[test]
    fn calibrated_edges_invert(
        day in days_in(JD_1972, JD_2030),
        fraction in 0.0f64..1.0,
        offset in -100.0f64..100.0,
    ) {
        let offset = Seconds::new(offset);
        let tai = date(day, fraction, TimeStandard::Tai);
        let ut1 = convert::tai_to_ut1(tai, offset).unwrap();
        assert_same_instant(convert::ut1_to_tai(ut1, offset).unwrap(), tai);

        let tt = date(day, fraction, TimeStandard::Tt);
        let ut1 = convert::tt_to_ut1(tt, offset).unwrap();
        assert_same_instant(convert::ut1_to_tt(ut1, offset).unwrap(), tt);

        let tdb = convert::tt_to_tdb(tt, offset).unwrap();
        assert_same_instant(convert::tdb_to_tt(tdb, offset).unwrap(), tt);
    }

    #[test]
    fn modelled_tdb_inverts(
        day in days_in(JD_1972, JD_2030),
        fraction in 0.0f64..1.0,
        longitude in -PI..PI,
        u in 0.0f64..6_378.0,
        v in -6_357.0f64..6_357.0,
    ) {
        let observer = Observer::new(longitude, u, v);
        let tt = date(day, fraction, TimeStandard::Tt);
        let tdb = convert::tt_to_tdb_modelled(tt, &observer).unwrap();
        assert_same_instant(convert::tdb_to_tt_modelled(tdb, &observer).unwrap(), tt);
    }

    #[test]
    fn utc_tai_round_trip(
        day in days_in(JD_1972, JD_2030),
        // The fixed point is seeded one ΔAT later; keep it inside the day.
        fraction in 0.0f64..0.999,
    ) {
        let utc = date(day, fraction, TimeStandard::Utc);
        let tai = convert::utc_to_tai(utc).unwrap();
        assert_same_instant(convert::tai_to_utc(tai).unwrap(), utc);
    }

    #[test]
    fn composite_edges_invert(
        day in days_in(JD_1972, JD_2030),
        // UTC legs go through the TAI → UTC fixed point.
        fraction in 0.0f64..0.999,
        tdb_minus_tt in -0.002f64..0.002,
        tt_minus_ut1 in 40.0f64..75.0,
    ) {
        let dtr = Seconds::new(tdb_minus_tt);
        let dt = Seconds::new(tt_minus_ut1);

        let utc = date(day, fraction, TimeStandard::Utc);
        assert_same_instant(convert::tt_to_utc(convert::utc_to_tt(utc).unwrap()).unwrap(), utc);
        assert_same_instant(convert::tcg_to_utc(convert::utc_to_tcg(utc).unwrap()).unwrap(), utc);
        let tdb = convert::utc_to_tdb(utc, dtr).unwrap();
        assert_same_instant(convert::tdb_to_utc(tdb, dtr).unwrap(), utc);
        let tcb = convert::utc_to_tcb(utc, dtr).unwrap();
        assert_same_instant(convert::tcb_to_utc(tcb, dtr).unwrap(), utc);

        let tai = date(day, fraction, TimeStandard::Tai);
        assert_same_instant(convert::tcg_to_tai(convert::tai_to_tcg(tai).unwrap()).unwrap(), tai);

        let tt = date(day, fraction, TimeStandard::Tt);
        assert_same_instant(convert::tcb_to_tt(convert::tt_to_tcb(tt, dtr).unwrap(), dtr).unwrap(), tt);

        let ut1 = date(day, fraction, TimeStandard::Ut1);
        let tcb = convert::ut1_to_tcb(ut1, dt, dtr).unwrap();
        assert_same_instant(convert::tcb_to_ut1(tcb, dtr, dt).unwrap(), ut1);
    }

    #[test]
    fn utc_ut1_round_trip(
        day in days_in(JD_1999, JD_2005_12_25),
        fraction in 0.0f64..1.0,
        dut1 in -0.9f64..0.9,
    ) {
        let dut1 = Seconds::new(dut1);
        let utc = date(day, fraction, TimeStandard::Utc);
        let ut1 = convert::utc_to_ut1(utc, dut1).unwrap();
        assert_same_instant(convert::ut1_to_utc(ut1, dut1).unwrap(), utc);
    }

    #[test]
    fn delta_at_never_decreases_after_1972(
        first in 0i64..21_000,
        gap in 0i64..3_000,
    ) {
        let start = NaiveDate::from_ymd_opt(1972, 1, 1).unwrap();
        let earlier = start + Duration::days(first);
        let later = earlier + Duration::days(gap);
        let a = delta_at_for_date(earlier, 0.0).unwrap().value();
        let b = delta_at_for_date(later, 0.0).unwrap().value();
        prop_assert!(a <= b, "{earlier}: {a} > {later}: {b}");
        prop_assert_eq!(a.fract(), 0.0);
    }

    #[test]
    fn tags_are_enforced(index in 0usize..TimeStandard::ALL.len(), fraction in 0.0f64..1.0) {
        let standard = TimeStandard::ALL[index];
        let jd = date(2_453_750.5, fraction, standard);
        let result: TimeResult<JulianDate> = convert::tai_to_tt(jd);
        match standard {
            TimeStandard::Tai | TimeStandard::Unspecified => {
                prop_assert_eq!(result.unwrap().standard(), TimeStandard::Tt);
            }
            other => prop_assert_eq!(
                result,
                Err(TimeError::WrongTimeStandard {
                    expected: TimeStandard::Tai,
                    actual: other,
                })
            ),
        }
    }
}
