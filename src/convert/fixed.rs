// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Edges defined by IAU constants alone.

use crate::constants::{
    L_B, L_G, MJD_1977, MJD_ZERO_POINT, SECONDS_PER_DAY, TDB0_SECONDS, TT_MINUS_TAI_DAYS,
};
use crate::error::TimeResult;
use crate::julian_date::JulianDate;
use crate::standard::TimeStandard;

/// TT at 1977-01-01T00:00:00 TAI, as an MJD.
const TT_1977_MJD: f64 = MJD_1977 + TT_MINUS_TAI_DAYS;

/// `L_G / (1 − L_G)`: TCG gains this much per unit of TT.
const TCG_RATE: f64 = L_G / (1.0 - L_G);

/// 1977-01-01T00:00:00 as a Julian Date.
const JD_1977: f64 = MJD_ZERO_POINT + MJD_1977;

const TDB0_DAYS: f64 = TDB0_SECONDS / SECONDS_PER_DAY;

/// `L_B / (1 − L_B)`: TCB gains this much per unit of TDB.
const TCB_RATE: f64 = L_B / (1.0 - L_B);

/// `TT = TAI + 32.184 s`.
pub fn tai_to_tt(tai: JulianDate) -> TimeResult<JulianDate> {
    tai.standard().ensure(TimeStandard::Tai)?;
    tai.shifted(TT_MINUS_TAI_DAYS, TimeStandard::Tt)
}

/// `TAI = TT − 32.184 s`.
pub fn tt_to_tai(tt: JulianDate) -> TimeResult<JulianDate> {
    tt.standard().ensure(TimeStandard::Tt)?;
    tt.shifted(-TT_MINUS_TAI_DAYS, TimeStandard::Tai)
}

/// TCG runs faster than TT by `L_G`, the two agreeing at 1977-01-01 TAI.
pub fn tt_to_tcg(tt: JulianDate) -> TimeResult<JulianDate> {
    tt.standard().ensure(TimeStandard::Tt)?;
    tt.absorb(TimeStandard::Tcg, |big, small| {
        ((big - MJD_ZERO_POINT) + (small - TT_1977_MJD)) * TCG_RATE
    })
}

pub fn tcg_to_tt(tcg: JulianDate) -> TimeResult<JulianDate> {
    tcg.standard().ensure(TimeStandard::Tcg)?;
    tcg.absorb(TimeStandard::Tt, |big, small| {
        -((big - MJD_ZERO_POINT) + (small - TT_1977_MJD)) * L_G
    })
}

/// `TDB = TCB − L_B × (TCB − T₀) + TDB₀` (IAU 2006 Resolution B3).
pub fn tcb_to_tdb(tcb: JulianDate) -> TimeResult<JulianDate> {
    tcb.standard().ensure(TimeStandard::Tcb)?;
    tcb.absorb(TimeStandard::Tdb, |big, small| {
        TDB0_DAYS - ((big - JD_1977) + (small - TT_MINUS_TAI_DAYS)) * L_B
    })
}

pub fn tdb_to_tcb(tdb: JulianDate) -> TimeResult<JulianDate> {
    tdb.standard().ensure(TimeStandard::Tdb)?;
    tdb.absorb(TimeStandard::Tcb, |big, small| {
        let since_1977 = JD_1977 - big;
        let without_offset = small - TDB0_DAYS;
        -TDB0_DAYS - (since_1977 - (without_offset - TT_MINUS_TAI_DAYS)) * TCB_RATE
    })
}
