// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Physical and epoch constants used by the conversion graph.
//!
//! | Constant | Value | Source |
//! |----------|-------|--------|
//! | [`TT_MINUS_TAI_SECONDS`] | 32.184 s | IAU 1991 |
//! | [`L_G`] | 6.969290134 × 10⁻¹⁰ | IAU 2000 Res. B1.9 |
//! | [`L_B`] | 1.550519768 × 10⁻⁸ | IAU 2006 Res. B3 |
//! | [`TDB0_SECONDS`] | −6.55 × 10⁻⁵ s | IAU 2006 Res. B3 |

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian millennium.
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Reference epoch J2000.0 as a Julian Date.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of Modified Julian Date zero.
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// 1977-01-01T00:00:00 as a Modified Julian Date.
pub const MJD_1977: f64 = 43_144.0;

/// `TT − TAI` in seconds.
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

/// `TT − TAI` in days.
pub const TT_MINUS_TAI_DAYS: f64 = TT_MINUS_TAI_SECONDS / SECONDS_PER_DAY;

/// `L_G = 1 − d(TT)/d(TCG)`.
pub const L_G: f64 = 6.969_290_134e-10;

/// `L_B = 1 − d(TDB)/d(TCB)`.
pub const L_B: f64 = 1.550_519_768e-8;

/// TDB at TAI 1977-01-01T00:00:00, in seconds.
pub const TDB0_SECONDS: f64 = -6.55e-5;

/// Smallest combined Julian Date accepted by [`JulianDate`](crate::JulianDate).
pub const MIN_JULIAN_DATE: f64 = 0.0;

/// Largest combined Julian Date accepted by [`JulianDate`](crate::JulianDate).
pub const MAX_JULIAN_DATE: f64 = 1e9;
