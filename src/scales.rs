// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies one [`TimeStandard`] at the type level.
//!
//! | Marker | Description | Calibration-free neighbours |
//! |--------|-------------|-----------------------------|
//! | [`UTC`] | Coordinated Universal Time | TAI, TT, TCG |
//! | [`UT1`] | Universal Time (Earth rotation) | none |
//! | [`TAI`] | International Atomic Time | UTC, TT, TCG |
//! | [`TT`]  | Terrestrial Time | UTC, TAI, TCG |
//! | [`TCG`] | Geocentric Coordinate Time | UTC, TAI, TT |
//! | [`TDB`] | Barycentric Dynamical Time | TCB |
//! | [`TCB`] | Barycentric Coordinate Time | TDB |
//!
//! The two clusters are joined by `TT ↔ TDB`, which needs either the
//! barycentric series or a measured offset, and UT1 hangs off UTC and TT
//! through published Earth-orientation values.

use crate::convert;
use crate::error::{TimeError, TimeResult};
use crate::instant::{ConvertTo, Time, TimeScale};
use crate::julian_date::JulianDate;
use crate::standard::TimeStandard;

macro_rules! time_scale {
    ($(#[$doc:meta])* $name:ident => $standard:ident) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
        pub struct $name;

        impl TimeScale for $name {
            const LABEL: &'static str = TimeStandard::$standard.label();
            const STANDARD: TimeStandard = TimeStandard::$standard;
        }

        impl ConvertTo<$name> for $name {
            #[inline]
            fn convert(jd: JulianDate) -> TimeResult<JulianDate> {
                Ok(jd)
            }
        }
    };
}

time_scale! {
    /// Coordinated Universal Time. Dates inside a leap-second day stretch
    /// their fraction over 86 401 s.
    UTC => Utc
}
time_scale! {
    /// Universal Time, tied to Earth's rotation angle.
    UT1 => Ut1
}
time_scale! {
    /// International Atomic Time.
    TAI => Tai
}
time_scale! {
    /// Terrestrial Time, `TAI + 32.184 s`.
    TT => Tt
}
time_scale! {
    /// Geocentric Coordinate Time.
    TCG => Tcg
}
time_scale! {
    /// Barycentric Dynamical Time.
    TDB => Tdb
}
time_scale! {
    /// Barycentric Coordinate Time.
    TCB => Tcb
}

// ---------------------------------------------------------------------------
// Calibration-free edges  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate `ConvertTo` plus `TryFrom` for each listed edge.
macro_rules! impl_time_conversions {
    ($($from:ty => $to:ty : $edge:path),+ $(,)?) => {
        $(
            impl ConvertTo<$to> for $from {
                #[inline]
                fn convert(jd: JulianDate) -> TimeResult<JulianDate> {
                    $edge(jd)
                }
            }

            impl TryFrom<Time<$from>> for Time<$to> {
                type Error = TimeError;

                #[inline]
                fn try_from(t: Time<$from>) -> TimeResult<Self> {
                    t.to::<$to>()
                }
            }
        )+
    };
}

impl_time_conversions! {
    UTC => TAI: convert::utc_to_tai,
    TAI => UTC: convert::tai_to_utc,
    UTC => TT: convert::utc_to_tt,
    TT => UTC: convert::tt_to_utc,
    UTC => TCG: convert::utc_to_tcg,
    TCG => UTC: convert::tcg_to_utc,
    TAI => TT: convert::tai_to_tt,
    TT => TAI: convert::tt_to_tai,
    TAI => TCG: convert::tai_to_tcg,
    TCG => TAI: convert::tcg_to_tai,
    TT => TCG: convert::tt_to_tcg,
    TCG => TT: convert::tcg_to_tt,
    TDB => TCB: convert::tdb_to_tcb,
    TCB => TDB: convert::tcb_to_tdb,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const DAY: f64 = 2_453_750.5;

    #[test]
    fn labels_match_the_standards() {
        assert_eq!(UTC::LABEL, "UTC");
        assert_eq!(UT1::LABEL, "UT1");
        assert_eq!(TCB::LABEL, "TCB");
        assert_eq!(TT::STANDARD, TimeStandard::Tt);
    }

    #[test]
    fn try_from_runs_the_edge() {
        let utc = Time::<UTC>::new(DAY, 0.5).unwrap();
        let tai = Time::<TAI>::try_from(utc).unwrap();
        let offset = (tai.fraction_of_day() - utc.fraction_of_day()) * SECONDS_PER_DAY;
        assert!((offset - 33.0).abs() < 1e-6, "{offset}");

        let back: Time<UTC> = tai.try_into().unwrap();
        assert!((back - utc).value().abs() < 1e-12);
    }

    #[test]
    fn utc_before_1960_fails_on_the_typed_path() {
        let utc = Time::<UTC>::from_date(2_436_000.5).unwrap();
        assert!(matches!(
            utc.to::<TT>(),
            Err(TimeError::PreUtcDate { .. })
        ));
    }

    #[test]
    fn tcg_leads_tt_after_1977() {
        let tt = Time::<TT>::new(DAY, 0.5).unwrap();
        let tcg = tt.to::<TCG>().unwrap();
        let lead = (tcg.fraction_of_day() - tt.fraction_of_day()) * SECONDS_PER_DAY;
        // ~0.6 s by 2006.
        assert!(lead > 0.5 && lead < 0.7, "{lead}");
    }
}
