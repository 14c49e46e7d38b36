use crate::{
    calendar::days_in_month,
    date::Date,
    error::{DateError, Field, RangeViolation},
    range::Range,
};
use tracing::debug;

/// The allowed ranges for each field of a [Date].
///
/// The [Default] ranges are day `[1,31]`, month `[1,12]` and year `[1538,2300]`.
///
/// ```
/// use nextday::{Date, DateRanges, Range};
///
/// let ranges = DateRanges {
///     year: Range::new(2000, 2099).unwrap(),
///     ..DateRanges::default()
/// };
/// assert!(ranges.violations(&Date::new(1, 1, 2100)).len() == 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRanges {
    /// Allowed days.
    pub day: Range,
    /// Allowed months.
    pub month: Range,
    /// Allowed years.
    pub year: Range,
}

impl DateRanges {
    /// Default range for days.
    pub const DAY: Range = Range::new_unchecked(1, 31);
    /// Default range for months.
    pub const MONTH: Range = Range::new_unchecked(1, 12);
    /// Default range for years.
    pub const YEAR: Range = Range::new_unchecked(1538, 2300);

    /// Checks every field against its range and returns a [RangeViolation] for each one that
    /// fails, in day, month, year order. All three fields are always checked.
    pub fn violations(&self, date: &Date) -> Vec<RangeViolation> {
        [
            (Field::Day, date.day, self.day),
            (Field::Month, date.month, self.month),
            (Field::Year, date.year, self.year),
        ]
        .into_iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(field, value, range)| RangeViolation {
            field,
            value,
            range,
        })
        .collect()
    }
}

impl Default for DateRanges {
    fn default() -> Self {
        Self {
            day: Self::DAY,
            month: Self::MONTH,
            year: Self::YEAR,
        }
    }
}

/// Validates that each of the day, month and year of `date` are within `ranges`.
///
/// This does not check that the day exists in its month; see [validate_calendar_date] for that.
///
/// # Errors
///
/// - Returns a [DateError::OutOfRange] listing every field that is out of its range.
pub fn validate_date(date: &Date, ranges: &DateRanges) -> Result<(), DateError> {
    let violations = ranges.violations(date);
    if violations.is_empty() {
        debug!(%date, "date fields within ranges");
        return Ok(());
    }
    for violation in &violations {
        debug!(value = violation.value, "{violation}");
    }
    Err(DateError::OutOfRange(violations))
}

/// Validates that the day of `date` exists in its month and year, taking leap years into account.
///
/// The month is assumed to already be valid, e.g. by having passed [validate_date] with the
/// default month range.
///
/// # Errors
///
/// - Returns a [DateError::DayNotInMonth] if the day is past the end of the month.
/// - Returns a [DateError::InvalidMonth] if the month is not between 1 and 12.
pub fn validate_calendar_date(date: &Date) -> Result<(), DateError> {
    let max_day = days_in_month(date.month, date.year)?;
    if date.day > max_day {
        let err = DateError::DayNotInMonth {
            day: date.day,
            month: date.month,
            year: date.year,
            max_day,
        };
        debug!("{err}");
        return Err(err);
    }
    debug!(%date, max_day, "day exists in month");
    Ok(())
}
