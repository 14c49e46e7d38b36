use core::fmt::{self, Display};

use crate::range::Range;

/// A field of a [Date](crate::Date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The day of the month.
    Day,
    /// The month of the year.
    Month,
    /// The year.
    Year,
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Day => "Day",
            Field::Month => "Month",
            Field::Year => "Year",
        })
    }
}

/// A single field that fell outside of its allowed [Range].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{} out of range [{},{}]", .field, .range.min(), .range.max())]
pub struct RangeViolation {
    /// The offending field.
    pub field: Field,
    /// The value that was given for the field.
    pub value: i32,
    /// The range the value should have been in.
    pub range: Range,
}

/// Errors for validating dates and computing the next one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// One or more fields are outside of their configured ranges. There is one violation per
    /// failing field, in day, month, year order.
    #[error("{}", join_lines(.0))]
    OutOfRange(Vec<RangeViolation>),

    /// The day is past the last day of its month.
    #[error(
        "Given number of days is incorrect. Month {month} in year {year} has {max_day} days"
    )]
    DayNotInMonth {
        /// The given day.
        day: i32,
        /// The given month.
        month: i32,
        /// The given year.
        year: i32,
        /// The number of days in that month and year.
        max_day: i32,
    },

    /// The month is not between 1 and 12.
    #[error("Month `{month}` should be between 1 and 12")]
    InvalidMonth {
        /// The given month.
        month: i32,
    },

    /// The day after the date has a year that does not fit in an `i32`.
    #[error("The day after {date} is past the largest representable year")]
    YearOverflow {
        /// The date whose next day could not be computed.
        date: crate::date::Date,
    },

    /// A [Range] was built with its minimum above its maximum.
    #[error("Range minimum ({min}) should not be greater than its maximum ({max})")]
    EmptyRange {
        /// The given minimum.
        min: i32,
        /// The given maximum.
        max: i32,
    },

    /// The input could not be read as a date.
    #[error("Input `{input}` should be three whitespace-separated integers: day, month, year")]
    MalformedInput {
        /// The trimmed input text.
        input: String,
    },
}

impl DateError {
    /// Returns the process exit code a command line front end should use for this error: `2` for
    /// a date that fails the calendar check, `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            DateError::DayNotInMonth { .. } => 2,
            _ => 1,
        }
    }

    /// Returns one diagnostic line per failing check.
    pub fn diagnostics(&self) -> Vec<String> {
        match self {
            DateError::OutOfRange(violations) => violations.iter().map(|v| v.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

fn join_lines(violations: &[RangeViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
