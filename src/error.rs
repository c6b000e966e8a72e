// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation of the crate.

use thiserror::Error;

use crate::standard::TimeStandard;

/// Convenience alias used throughout the crate.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors raised while building Julian dates or converting between standards.
///
/// A *dubious* leap-second era is deliberately **not** an error: it travels
/// as [`LeapSecondStatus::Dubious`](crate::LeapSecondStatus::Dubious) next to
/// a best-effort ΔAT value and the caller decides whether it is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeError {
    /// Malformed `(day_number, fraction_of_day)` pair or a combined date
    /// outside `[0, 1e9]`.
    #[error("invalid Julian date: day number {day_number}, fraction of day {fraction_of_day}")]
    InvalidJulianDate {
        day_number: f64,
        fraction_of_day: f64,
    },

    /// A conversion edge received a date tagged with another standard.
    #[error("unexpected time standard: expected {expected} but got {actual}")]
    WrongTimeStandard {
        expected: TimeStandard,
        actual: TimeStandard,
    },

    /// Arithmetic between two dates tagged with different standards.
    #[error("cannot combine a {left} date with a {right} date")]
    MixedTimeStandards {
        left: TimeStandard,
        right: TimeStandard,
    },

    /// The Gregorian date does not exist.
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    /// A fraction of day outside `[0, 1]` was handed to the ΔAT resolver.
    #[error("fraction of day {0} is outside [0, 1]")]
    InvalidFractionOfDay(f64),

    /// UTC is undefined before 1960-01-01.
    #[error("{year}-{month:02} predates UTC (1960-01-01)")]
    PreUtcDate { year: i32, month: u32 },

    /// The date cannot be expressed as a `chrono` civil date-time.
    #[error("Julian date cannot be represented as a civil date-time")]
    UnrepresentableDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_standard_message_names_both_tags() {
        let err = TimeError::WrongTimeStandard {
            expected: TimeStandard::Tai,
            actual: TimeStandard::Utc,
        };
        let msg = err.to_string();
        assert!(msg.contains("TAI"), "{msg}");
        assert!(msg.contains("UTC"), "{msg}");
    }

    #[test]
    fn calendar_message_is_zero_padded() {
        let err = TimeError::InvalidCalendarDate {
            year: 2021,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid calendar date 2021-02-30");
    }
}
