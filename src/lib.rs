//! # nextday
//!
//! A library for validating a proleptic Gregorian date and computing the day after it.
//!
//! ## Examples
//!
//! Quickly get the next day, validating along the way:
//!
//! ```
//! use nextday::prelude::*;
//!
//! let next = advance(
//!   &Date::new(28, 2, 2024),  // day, month, year
//!   &DateRanges::default(),   // allowed range for each field
//!   Rollover::Strict,         // how months and years roll over
//! ).unwrap();
//! assert_eq!(next.to_string(), "2024-02-29");
//! ```
//!
//! Or, break down the steps:
//!
//! ```
//! use nextday::prelude::*;
//!
//! let date: Date = "30 2 2023".parse().unwrap();
//!
//! // every field is within its range...
//! assert!(validate_date(&date, &DateRanges::default()).is_ok());
//!
//! // ...but February 2023 only has 28 days
//! let err = validate_calendar_date(&date).unwrap_err();
//! assert_eq!(err.exit_code(), 2);
//! ```
//!
//! ## Validation
//!
//! A date goes through two independent checks before its next day is computed:
//!
//! 1. **Range validation** ([validate_date]): the day, month and year are each checked against a
//!    [Range] from [DateRanges]. Every failing field is reported, not just the first.
//! 2. **Calendar validation** ([validate_calendar_date]): the day is checked against the real
//!    length of its month, with February resolved by [is_leap_year].
//!
//! ## Rollover
//!
//! [Rollover::Strict] (the default) follows the calendar. [Rollover::Legacy] keeps the behavior
//! of the legacy `dateNextDay` tool, which sent every December date into January of the next year
//! and never advanced any other month.
//!
//! ## Prelude
//!
//! nextday provides a prelude module for convenience. Use it with:
//!
//! ```
//! use nextday::prelude::*;
//! ```
#![warn(missing_docs)]

mod calendar;
mod date;
mod error;
mod next_day;
mod range;
mod validate;

pub use crate::calendar::{days_in_month, is_leap_year};
pub use crate::date::Date;
pub use crate::error::{DateError, Field, RangeViolation};
pub use crate::next_day::{next_day, next_day_with, Rollover};
pub use crate::range::{is_in_range, Range};
pub use crate::validate::{validate_calendar_date, validate_date, DateRanges};

/// Runs the whole pipeline: [validate_date], then [validate_calendar_date], then
/// [next_day_with].
///
/// # Errors
///
/// - Returns a [DateError::OutOfRange] if any field is outside of `ranges`.
/// - Returns a [DateError::DayNotInMonth] if the day does not exist in its month.
/// - Returns a [DateError::InvalidMonth] if `ranges` allow a month outside of 1 to 12 and the date
///   uses one.
/// - Returns a [DateError::YearOverflow] if `ranges` allow year `i32::MAX` and the date is its last
///   day.
pub fn advance(date: &Date, ranges: &DateRanges, rollover: Rollover) -> Result<Date, DateError> {
    validate_date(date, ranges)?;
    validate_calendar_date(date)?;
    next_day_with(date, rollover)
}

/// A convenience module appropriate for glob imports (`use nextday::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::advance;
    #[doc(no_inline)]
    pub use crate::days_in_month;
    #[doc(no_inline)]
    pub use crate::is_in_range;
    #[doc(no_inline)]
    pub use crate::is_leap_year;
    #[doc(no_inline)]
    pub use crate::next_day;
    #[doc(no_inline)]
    pub use crate::next_day_with;
    #[doc(no_inline)]
    pub use crate::validate_calendar_date;
    #[doc(no_inline)]
    pub use crate::validate_date;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::DateRanges;
    #[doc(no_inline)]
    pub use crate::Field;
    #[doc(no_inline)]
    pub use crate::Range;
    #[doc(no_inline)]
    pub use crate::RangeViolation;
    #[doc(no_inline)]
    pub use crate::Rollover;
}
