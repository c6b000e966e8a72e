// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Edges that need a measured or modelled offset from the caller.
//!
//! UT1 follows the Earth's rotation and can only be obtained from IERS
//! observations, so `UT1 − TAI` and `TT − UT1` are arguments. `TDB − TT`
//! is an argument too; [`tt_to_tdb_modelled`] and [`tdb_to_tt_modelled`]
//! fill it from the analytical series when nothing better is at hand.

use qtty::Seconds;

use crate::barycentric::{tdb_minus_tt, Observer};
use crate::constants::SECONDS_PER_DAY;
use crate::error::TimeResult;
use crate::julian_date::JulianDate;
use crate::standard::TimeStandard;

#[inline]
fn days(offset: Seconds) -> f64 {
    offset.value() / SECONDS_PER_DAY
}

pub fn tai_to_ut1(tai: JulianDate, ut1_minus_tai: Seconds) -> TimeResult<JulianDate> {
    tai.standard().ensure(TimeStandard::Tai)?;
    tai.shifted(days(ut1_minus_tai), TimeStandard::Ut1)
}

pub fn ut1_to_tai(ut1: JulianDate, ut1_minus_tai: Seconds) -> TimeResult<JulianDate> {
    ut1.standard().ensure(TimeStandard::Ut1)?;
    ut1.shifted(-days(ut1_minus_tai), TimeStandard::Tai)
}

/// `tt_minus_ut1` is the classical ΔT.
pub fn tt_to_ut1(tt: JulianDate, tt_minus_ut1: Seconds) -> TimeResult<JulianDate> {
    tt.standard().ensure(TimeStandard::Tt)?;
    tt.shifted(-days(tt_minus_ut1), TimeStandard::Ut1)
}

pub fn ut1_to_tt(ut1: JulianDate, tt_minus_ut1: Seconds) -> TimeResult<JulianDate> {
    ut1.standard().ensure(TimeStandard::Ut1)?;
    ut1.shifted(days(tt_minus_ut1), TimeStandard::Tt)
}

pub fn tt_to_tdb(tt: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tt.standard().ensure(TimeStandard::Tt)?;
    tt.shifted(days(tdb_minus_tt), TimeStandard::Tdb)
}

pub fn tdb_to_tt(tdb: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tdb.standard().ensure(TimeStandard::Tdb)?;
    tdb.shifted(-days(tdb_minus_tt), TimeStandard::Tt)
}

/// [`tt_to_tdb`] with `TDB − TT` taken from the Fairhead & Bretagnon series.
///
/// The TT date stands in for TDB as the series argument and its fraction of
/// day for UT1; both substitutions are far below the model's accuracy.
pub fn tt_to_tdb_modelled(tt: JulianDate, observer: &Observer) -> TimeResult<JulianDate> {
    tt.standard().ensure(TimeStandard::Tt)?;
    let offset = tdb_minus_tt(tt.retagged(TimeStandard::Tdb), tt.fraction_of_day(), observer)?;
    tracing::trace!(offset = offset.value(), "modelled TDB − TT");
    tt_to_tdb(tt, offset)
}

/// [`tdb_to_tt`] with `TDB − TT` taken from the Fairhead & Bretagnon series.
pub fn tdb_to_tt_modelled(tdb: JulianDate, observer: &Observer) -> TimeResult<JulianDate> {
    tdb.standard().ensure(TimeStandard::Tdb)?;
    let offset = tdb_minus_tt(tdb, tdb.fraction_of_day(), observer)?;
    tracing::trace!(offset = offset.value(), "modelled TDB − TT");
    tdb_to_tt(tdb, offset)
}
