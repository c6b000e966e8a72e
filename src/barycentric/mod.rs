// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `TDB − TT` from the Fairhead & Bretagnon (1990) analytical series.
//!
//! The geocentric part is a 787-term harmonic series kept in a private
//! coefficient table; a handful of diurnal terms add the topocentric
//! contribution for an observer on the Earth's surface, and four small
//! corrections bring the result into line with the JPL DE405 ephemeris.
//! Over 1950–2050 the model agrees with numerical integration to a few
//! nanoseconds.

mod coefficients;

use std::f64::consts::TAU;

use qtty::Seconds;

use crate::error::TimeResult;
use crate::julian_date::JulianDate;
use crate::standard::TimeStandard;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the clock is, for the topocentric part of `TDB − TT`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// East longitude, radians.
    pub longitude: f64,
    /// Distance from the Earth's spin axis, km.
    pub spin_axis_distance_km: f64,
    /// Distance north of the equatorial plane, km.
    pub equatorial_plane_distance_km: f64,
}

impl Observer {
    /// The geocentre: every topocentric term vanishes.
    pub const GEOCENTER: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(
        longitude: f64,
        spin_axis_distance_km: f64,
        equatorial_plane_distance_km: f64,
    ) -> Self {
        Self {
            longitude,
            spin_axis_distance_km,
            equatorial_plane_distance_km,
        }
    }
}

/// `TDB − TT` at `tdb` for an `observer`.
///
/// `ut` is the UT1 fraction of day, used only by the diurnal terms; the TT
/// or TDB fraction is an adequate stand-in. `tdb` may be tagged `Tdb` or be
/// untagged (TT is close enough as an argument).
pub fn tdb_minus_tt(tdb: JulianDate, ut: f64, observer: &Observer) -> TimeResult<Seconds> {
    tdb.standard().ensure(TimeStandard::Tdb)?;
    let t = tdb.julian_millennia();

    Ok(Seconds::new(
        topocentric(t, ut, observer) + geocentric(t) + jpl_adjustment(t),
    ))
}

/// Mean argument `a + b·w` (degrees, `b` per unit `w`) reduced to radians.
#[inline]
fn mean_argument(at_epoch_deg: f64, rate: f64, w: f64) -> f64 {
    ((at_epoch_deg + rate * w) % 360.0).to_radians()
}

fn topocentric(t: f64, ut: f64, observer: &Observer) -> f64 {
    // Local solar time, radians.
    let tsol = (ut % 1.0) * TAU + observer.longitude;

    // Arcseconds of rate per millennium, applied to degrees: w = t / 3600.
    let w = t / 3600.0;
    let sun_longitude = mean_argument(280.466_456_83, 1_296_027_711.034_29, w);
    let sun_anomaly = mean_argument(357.529_109_18, 1_295_965_810.481, w);
    let moon_elongation = mean_argument(297.850_195_47, 16_029_616_012.090, w);
    let jupiter_longitude = mean_argument(34.351_518_74, 109_306_899.894_53, w);
    let saturn_longitude = mean_argument(50.077_444_30, 44_046_398.470_38, w);

    let u = observer.spin_axis_distance_km;
    let v = observer.equatorial_plane_distance_km;

    0.000_29e-10 * u * (tsol + sun_longitude - saturn_longitude).sin()
        + 0.001_00e-10 * u * (tsol - 2.0 * sun_anomaly).sin()
        + 0.001_33e-10 * u * (tsol - moon_elongation).sin()
        + 0.001_33e-10 * u * (tsol + sun_longitude - jupiter_longitude).sin()
        - 0.002_29e-10 * u * (tsol + 2.0 * sun_longitude + sun_anomaly).sin()
        - 0.022_00e-10 * v * (sun_longitude + sun_anomaly).cos()
        + 0.053_12e-10 * u * (tsol - sun_anomaly).sin()
        - 0.136_77e-10 * u * (tsol + 2.0 * sun_longitude).sin()
        - 1.318_40e-10 * v * sun_longitude.cos()
        + 3.176_79e-10 * u * tsol.sin()
}

/// Sum of one band, smallest terms first.
fn band(terms: &[[f64; 3]], t: f64) -> f64 {
    terms
        .iter()
        .rev()
        .fold(0.0, |acc, [amplitude, frequency, phase]| {
            acc + amplitude * (frequency * t + phase).sin()
        })
}

fn geocentric(t: f64) -> f64 {
    let w0 = band(&coefficients::T0, t);
    let w1 = band(&coefficients::T1, t);
    let w2 = band(&coefficients::T2, t);
    let w3 = band(&coefficients::T3, t);
    let w4 = band(&coefficients::T4, t);
    t * (t * (t * (t * w4 + w3) + w2) + w1) + w0
}

fn jpl_adjustment(t: f64) -> f64 {
    0.000_65e-6 * (6_069.776_754 * t + 4.021_194).sin()
        + 0.000_33e-6 * (213.299_095 * t + 5.543_132).sin()
        + (-0.001_96e-6 * (6_208.294_251 * t + 5.696_701).sin())
        + (-0.001_73e-6 * (74.781_599 * t + 2.435_900).sin())
        + 0.036_38e-6 * t * t
}
