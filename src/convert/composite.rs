// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Multi-hop edges, chained through TT or TAI.
//!
//! Each composite leaves tag validation to its first hop.

use qtty::Seconds;

use super::calibrated::{tdb_to_tt, tt_to_tdb, tt_to_ut1, ut1_to_tt};
use super::fixed::{tai_to_tt, tcb_to_tdb, tcg_to_tt, tdb_to_tcb, tt_to_tai, tt_to_tcg};
use super::utc::{tai_to_utc, utc_to_tai};
use crate::error::TimeResult;
use crate::julian_date::JulianDate;

pub fn utc_to_tt(utc: JulianDate) -> TimeResult<JulianDate> {
    tai_to_tt(utc_to_tai(utc)?)
}

pub fn tt_to_utc(tt: JulianDate) -> TimeResult<JulianDate> {
    tai_to_utc(tt_to_tai(tt)?)
}

pub fn utc_to_tcg(utc: JulianDate) -> TimeResult<JulianDate> {
    tt_to_tcg(utc_to_tt(utc)?)
}

pub fn tcg_to_utc(tcg: JulianDate) -> TimeResult<JulianDate> {
    tt_to_utc(tcg_to_tt(tcg)?)
}

pub fn tai_to_tcg(tai: JulianDate) -> TimeResult<JulianDate> {
    tt_to_tcg(tai_to_tt(tai)?)
}

pub fn tcg_to_tai(tcg: JulianDate) -> TimeResult<JulianDate> {
    tt_to_tai(tcg_to_tt(tcg)?)
}

pub fn tt_to_tcb(tt: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tdb_to_tcb(tt_to_tdb(tt, tdb_minus_tt)?)
}

pub fn tcb_to_tt(tcb: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tdb_to_tt(tcb_to_tdb(tcb)?, tdb_minus_tt)
}

pub fn utc_to_tdb(utc: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tt_to_tdb(utc_to_tt(utc)?, tdb_minus_tt)
}

pub fn tdb_to_utc(tdb: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tt_to_utc(tdb_to_tt(tdb, tdb_minus_tt)?)
}

pub fn utc_to_tcb(utc: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tt_to_tcb(utc_to_tt(utc)?, tdb_minus_tt)
}

pub fn tcb_to_utc(tcb: JulianDate, tdb_minus_tt: Seconds) -> TimeResult<JulianDate> {
    tt_to_utc(tcb_to_tt(tcb, tdb_minus_tt)?)
}

pub fn tcb_to_ut1(
    tcb: JulianDate,
    tdb_minus_tt: Seconds,
    tt_minus_ut1: Seconds,
) -> TimeResult<JulianDate> {
    tt_to_ut1(tcb_to_tt(tcb, tdb_minus_tt)?, tt_minus_ut1)
}

pub fn ut1_to_tcb(
    ut1: JulianDate,
    tt_minus_ut1: Seconds,
    tdb_minus_tt: Seconds,
) -> TimeResult<JulianDate> {
    tt_to_tcb(ut1_to_tt(ut1, tt_minus_ut1)?, tdb_minus_tt)
}
