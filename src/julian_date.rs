// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Two-part Julian Date tagged with a [`TimeStandard`].
//!
//! A [`JulianDate`] is stored as a half-integer **day number** (the Julian
//! Date of the preceding 0h) plus a **fraction of day** in `[0, 1)`. The pair
//! is never collapsed into a single `f64` by this crate: near JD 2.45 × 10⁶ a
//! single double only resolves ~40 µs, while the split form keeps the
//! fraction at full precision.
//!
//! Every shift applied by a conversion edge goes through
//! [`JulianDate::absorb`], which keeps the larger-magnitude component intact,
//! adds the delta to the other one and then carries whole days back into the
//! day number.

use std::cmp::Ordering;
use std::fmt;

use qtty::{Days, Seconds};

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_MILLENNIUM, J2000_JD, MAX_JULIAN_DATE,
    MIN_JULIAN_DATE, SECONDS_PER_DAY,
};
use crate::error::{TimeError, TimeResult};
use crate::standard::TimeStandard;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable, standard-tagged Julian Date.
///
/// Invariants, checked at construction:
///
/// * `day_number − 0.5` is an integer,
/// * `0 ≤ fraction_of_day < 1`,
/// * `day_number + fraction_of_day ∈ [0, 1e9]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawJulianDate"))]
pub struct JulianDate {
    day_number: f64,
    fraction_of_day: f64,
    standard: TimeStandard,
}

impl JulianDate {
    /// J2000.0 epoch: JD 2 451 545.0, i.e. `(2 451 544.5, 0.5)`.
    pub const J2000: Self = Self {
        day_number: J2000_JD - 0.5,
        fraction_of_day: 0.5,
        standard: TimeStandard::Unspecified,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Build an untagged date from its two components.
    #[inline]
    pub fn new(day_number: f64, fraction_of_day: f64) -> TimeResult<Self> {
        Self::with_standard(day_number, fraction_of_day, TimeStandard::Unspecified)
    }

    /// Build a tagged date from its two components.
    pub fn with_standard(
        day_number: f64,
        fraction_of_day: f64,
        standard: TimeStandard,
    ) -> TimeResult<Self> {
        let half_integer = day_number.is_finite() && day_number - day_number.floor() == 0.5;
        let fraction_ok = (0.0..1.0).contains(&fraction_of_day);
        let date = day_number + fraction_of_day;
        if !half_integer || !fraction_ok || !(MIN_JULIAN_DATE..=MAX_JULIAN_DATE).contains(&date) {
            return Err(TimeError::InvalidJulianDate {
                day_number,
                fraction_of_day,
            });
        }
        Ok(Self {
            day_number,
            fraction_of_day,
            standard,
        })
    }

    /// Split a single combined date at the preceding half-integer.
    #[inline]
    pub fn from_date(date: f64) -> TimeResult<Self> {
        Self::from_date_with_standard(date, TimeStandard::Unspecified)
    }

    /// Split a single combined date at the preceding half-integer and tag it.
    ///
    /// For dates of half a day or more, both `date − 0.5` and
    /// `date − day_number` are exact, so the split itself adds no rounding.
    pub fn from_date_with_standard(date: f64, standard: TimeStandard) -> TimeResult<Self> {
        if !date.is_finite() || !(MIN_JULIAN_DATE..=MAX_JULIAN_DATE).contains(&date) {
            return Err(TimeError::InvalidJulianDate {
                day_number: date,
                fraction_of_day: 0.0,
            });
        }
        let mut day_number = (date - 0.5).floor() + 0.5;
        let mut fraction_of_day = date - day_number;
        if fraction_of_day >= 1.0 {
            day_number += 1.0;
            fraction_of_day -= 1.0;
        }
        Self::with_standard(day_number, fraction_of_day, standard)
    }

    /// Build a date from an arbitrary two-part sum `d1 + d2`, renormalising
    /// it so the invariants hold.
    pub(crate) fn from_parts(d1: f64, d2: f64, standard: TimeStandard) -> TimeResult<Self> {
        let (day_number, fraction_of_day) = normalize(d1, d2);
        Self::with_standard(day_number, fraction_of_day, standard)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Julian Date of the 0h preceding this instant (a half-integer).
    #[inline]
    pub const fn day_number(&self) -> f64 {
        self.day_number
    }

    /// Elapsed fraction of the day, in `[0, 1)`.
    #[inline]
    pub const fn fraction_of_day(&self) -> f64 {
        self.fraction_of_day
    }

    #[inline]
    pub const fn standard(&self) -> TimeStandard {
        self.standard
    }

    /// Both components as a `(day_number, fraction_of_day)` tuple.
    #[inline]
    pub const fn parts(&self) -> (f64, f64) {
        (self.day_number, self.fraction_of_day)
    }

    /// Collapse into a single `f64`.
    ///
    /// This loses precision (≈ 40 µs near the present epoch) and the tag;
    /// it exists for display and for callers that explicitly accept that.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.day_number + self.fraction_of_day
    }

    /// The same instant with another tag. No conversion is applied.
    #[inline]
    pub const fn retagged(self, standard: TimeStandard) -> Self {
        Self { standard, ..self }
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((self.day_number - J2000_JD) + self.fraction_of_day) / DAYS_PER_JULIAN_CENTURY
    }

    /// Julian millennia since J2000.0.
    #[inline]
    pub fn julian_millennia(&self) -> f64 {
        ((self.day_number - J2000_JD) + self.fraction_of_day) / DAYS_PER_JULIAN_MILLENNIUM
    }

    // ── precision-preserving shifts ───────────────────────────────────

    /// Shift into the smaller-magnitude component and retag.
    ///
    /// `delta(big, small)` receives the larger- and smaller-magnitude
    /// components and returns the shift in days, so rate-based edges can
    /// build their correction from the components without collapsing them.
    pub(crate) fn absorb<F>(self, standard: TimeStandard, delta: F) -> TimeResult<Self>
    where
        F: FnOnce(f64, f64) -> f64,
    {
        if self.day_number.abs() > self.fraction_of_day.abs() {
            let shift = delta(self.day_number, self.fraction_of_day);
            Self::from_parts(self.day_number, self.fraction_of_day + shift, standard)
        } else {
            let shift = delta(self.fraction_of_day, self.day_number);
            Self::from_parts(self.day_number + shift, self.fraction_of_day, standard)
        }
    }

    /// Shift by a constant number of days and retag.
    #[inline]
    pub(crate) fn shifted(self, delta_days: f64, standard: TimeStandard) -> TimeResult<Self> {
        self.absorb(standard, |_, _| delta_days)
    }

    /// The same standard, `days` later.
    #[inline]
    pub fn add_days(self, days: Days) -> TimeResult<Self> {
        self.shifted(days.value(), self.standard)
    }

    /// The same standard, `seconds` later.
    #[inline]
    pub fn add_seconds(self, seconds: Seconds) -> TimeResult<Self> {
        self.shifted(seconds.value() / SECONDS_PER_DAY, self.standard)
    }

    /// Elapsed days from `earlier` to `self`.
    ///
    /// The components are differenced pairwise before being summed.
    pub fn days_since(&self, earlier: &Self) -> TimeResult<Days> {
        self.standard.common(earlier.standard)?;
        Ok(Days::new(
            (self.day_number - earlier.day_number)
                + (self.fraction_of_day - earlier.fraction_of_day),
        ))
    }

    // ── date arithmetic ───────────────────────────────────────────────

    /// Component-wise sum, re-split into a valid date.
    pub fn checked_add(self, rhs: Self) -> TimeResult<Self> {
        let standard = self.standard.common(rhs.standard)?;
        Self::from_parts(
            self.day_number + rhs.day_number,
            self.fraction_of_day + rhs.fraction_of_day,
            standard,
        )
    }

    /// Component-wise difference, re-split into a valid date.
    pub fn checked_sub(self, rhs: Self) -> TimeResult<Self> {
        let standard = self.standard.common(rhs.standard)?;
        Self::from_parts(
            self.day_number - rhs.day_number,
            self.fraction_of_day - rhs.fraction_of_day,
            standard,
        )
    }
}

/// Renormalise `d1 + d2` into `(half-integer day, fraction in [0, 1))`.
///
/// The larger-magnitude part is split first; the remainder and the smaller
/// part are then folded into the fraction and whole days carried back.
pub(crate) fn normalize(d1: f64, d2: f64) -> (f64, f64) {
    let (big, small) = if d1.abs() >= d2.abs() {
        (d1, d2)
    } else {
        (d2, d1)
    };
    let mut day_number = (big - 0.5).floor() + 0.5;
    let mut fraction = (big - day_number) + small;
    let carry = fraction.floor();
    day_number += carry;
    fraction -= carry;
    if fraction >= 1.0 {
        day_number += 1.0;
        fraction -= 1.0;
    }
    (day_number, fraction)
}

// ── Ordering ──────────────────────────────────────────────────────────────

impl PartialOrd for JulianDate {
    /// Lexicographic on `(day_number, fraction_of_day)`.
    ///
    /// The same instant under two different tags is unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.day_number.partial_cmp(&other.day_number)? {
            Ordering::Equal => match self.fraction_of_day.partial_cmp(&other.fraction_of_day)? {
                Ordering::Equal if self.standard != other.standard => None,
                ord => Some(ord),
            },
            ord => Some(ord),
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} + {}",
            self.standard, self.day_number, self.fraction_of_day
        )
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawJulianDate {
    day_number: f64,
    fraction_of_day: f64,
    standard: TimeStandard,
}

#[cfg(feature = "serde")]
impl TryFrom<RawJulianDate> for JulianDate {
    type Error = TimeError;

    fn try_from(raw: RawJulianDate) -> Result<Self, Self::Error> {
        Self::with_standard(raw.day_number, raw.fraction_of_day, raw.standard)
    }
}
