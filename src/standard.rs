// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Runtime time-standard tag carried by every [`JulianDate`](crate::JulianDate).

use std::fmt;

use crate::error::{TimeError, TimeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The time standard a Julian date is expressed in.
///
/// [`Unspecified`](TimeStandard::Unspecified) is a wildcard: it passes every
/// tag check. All other variants are accepted only by the conversion edges
/// that expect them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeStandard {
    #[default]
    Unspecified,
    /// Civil local time. Carried for completeness; no edge accepts it.
    Local,
    Utc,
    Ut1,
    Tt,
    Tcb,
    Tdb,
    Tcg,
    Tai,
}

impl TimeStandard {
    /// All standards, `Unspecified` first.
    pub const ALL: [TimeStandard; 9] = [
        TimeStandard::Unspecified,
        TimeStandard::Local,
        TimeStandard::Utc,
        TimeStandard::Ut1,
        TimeStandard::Tt,
        TimeStandard::Tcb,
        TimeStandard::Tdb,
        TimeStandard::Tcg,
        TimeStandard::Tai,
    ];

    /// Short label, e.g. `"TAI"`.
    pub const fn label(self) -> &'static str {
        match self {
            TimeStandard::Unspecified => "JD",
            TimeStandard::Local => "Local",
            TimeStandard::Utc => "UTC",
            TimeStandard::Ut1 => "UT1",
            TimeStandard::Tt => "TT",
            TimeStandard::Tcb => "TCB",
            TimeStandard::Tdb => "TDB",
            TimeStandard::Tcg => "TCG",
            TimeStandard::Tai => "TAI",
        }
    }

    #[inline]
    pub const fn is_specified(self) -> bool {
        !matches!(self, TimeStandard::Unspecified)
    }

    /// The single validation gate of the conversion graph.
    ///
    /// Succeeds when `self` is `expected` or `Unspecified`.
    #[inline]
    pub fn ensure(self, expected: TimeStandard) -> TimeResult<()> {
        if self.is_specified() && self != expected {
            return Err(TimeError::WrongTimeStandard {
                expected,
                actual: self,
            });
        }
        Ok(())
    }

    /// Standard of the result of combining two dates.
    ///
    /// `Unspecified` yields to the other operand; two different specified
    /// standards cannot be combined.
    pub fn common(self, other: TimeStandard) -> TimeResult<TimeStandard> {
        match (self, other) {
            (a, b) if a == b => Ok(a),
            (TimeStandard::Unspecified, b) => Ok(b),
            (a, TimeStandard::Unspecified) => Ok(a),
            (left, right) => Err(TimeError::MixedTimeStandards { left, right }),
        }
    }
}

impl fmt::Display for TimeStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_passes_every_gate() {
        for expected in TimeStandard::ALL {
            assert!(TimeStandard::Unspecified.ensure(expected).is_ok());
        }
    }

    #[test]
    fn mismatching_tag_is_rejected() {
        let err = TimeStandard::Utc.ensure(TimeStandard::Tai).unwrap_err();
        assert_eq!(
            err,
            TimeError::WrongTimeStandard {
                expected: TimeStandard::Tai,
                actual: TimeStandard::Utc,
            }
        );
    }

    #[test]
    fn common_standard_rules() {
        use TimeStandard::*;
        assert_eq!(Tai.common(Tai), Ok(Tai));
        assert_eq!(Unspecified.common(Tt), Ok(Tt));
        assert_eq!(Tcg.common(Unspecified), Ok(Tcg));
        assert_eq!(
            Tai.common(Utc),
            Err(TimeError::MixedTimeStandards {
                left: Tai,
                right: Utc
            })
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(TimeStandard::Tdb.to_string(), "TDB");
        assert_eq!(format!("{}", TimeStandard::Unspecified), "JD");
    }
}
