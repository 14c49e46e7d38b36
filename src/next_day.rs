use crate::{calendar::days_in_month, date::Date, error::DateError};
use tracing::trace;

/// How the month and year move when computing the next day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rollover {
    /// The month advances only when the day rolls over to 1, and the year advances only when the
    /// month rolls over from December. This is the real calendar.
    #[default]
    Strict,

    /// Bug-for-bug compatible with the legacy `dateNextDay` tool: any December date moves to
    /// January of the next year (so 15 Dec 2023 becomes 16 Jan 2024), and the last day of any
    /// other month wraps to day 1 of the *same* month (so 31 Jan 2023 becomes 1 Jan 2023).
    Legacy,
}

/// Returns the day after `date` in the proleptic Gregorian calendar.
///
/// `date` is assumed to be valid, i.e. to have passed both
/// [validate_date](crate::validate_date) and
/// [validate_calendar_date](crate::validate_calendar_date).
///
/// ```
/// use nextday::{next_day, Date};
///
/// assert_eq!(Ok(Date::new(1, 1, 2024)), next_day(&Date::new(31, 12, 2023)));
/// ```
///
/// # Errors
///
/// - Returns a [DateError::InvalidMonth] if the month is not between 1 and 12.
/// - Returns a [DateError::YearOverflow] if the next day would be after year `i32::MAX`.
pub fn next_day(date: &Date) -> Result<Date, DateError> {
    next_day_with(date, Rollover::Strict)
}

/// Like [next_day], but with an explicit [Rollover] rule.
///
/// # Errors
///
/// - Returns a [DateError::InvalidMonth] if the month is not between 1 and 12.
/// - Returns a [DateError::YearOverflow] if the next day would be after year `i32::MAX`.
pub fn next_day_with(date: &Date, rollover: Rollover) -> Result<Date, DateError> {
    let mut next = *date;

    let day_rolled_over = date.day == days_in_month(date.month, date.year)?;
    if day_rolled_over {
        next.day = 1;
    } else {
        next.day += 1;
    }

    let month_advances = match rollover {
        Rollover::Strict => day_rolled_over,
        Rollover::Legacy => date.month == 12,
    };

    if month_advances {
        if date.month == 12 {
            next.month = 1;
            next.year = date
                .year
                .checked_add(1)
                .ok_or(DateError::YearOverflow { date: *date })?;
        } else if rollover == Rollover::Strict {
            next.month += 1;
        }
    }

    trace!(from = %date, to = %next, ?rollover, "computed next day");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_calendar_date, validate_date, DateRanges};
    use chrono::NaiveDate;
    use itertools::iproduct;
    use rstest::*;

    #[rstest]
    #[case(Date::new(31, 1, 2023), Date::new(1, 2, 2023))]
    #[case(Date::new(31, 12, 2023), Date::new(1, 1, 2024))]
    #[case(Date::new(28, 2, 2024), Date::new(29, 2, 2024))]
    #[case(Date::new(29, 2, 2024), Date::new(1, 3, 2024))]
    #[case(Date::new(28, 2, 2023), Date::new(1, 3, 2023))]
    #[case(Date::new(28, 2, 1900), Date::new(1, 3, 1900))]
    #[case(Date::new(30, 4, 2023), Date::new(1, 5, 2023))]
    #[case(Date::new(31, 12, 2300), Date::new(1, 1, 2301))]
    // mid-December stays in December
    #[case(Date::new(15, 12, 2023), Date::new(16, 12, 2023))]
    fn test_next_day(#[case] date: Date, #[case] expected: Date) {
        assert_eq!(Ok(expected), next_day(&date));
    }

    #[rstest]
    // reproduced defect: mid-December jumps a month and a year
    #[case(Date::new(15, 12, 2023), Date::new(16, 1, 2024))]
    #[case(Date::new(31, 12, 2023), Date::new(1, 1, 2024))]
    // reproduced defect: month ends wrap within the same month
    #[case(Date::new(31, 1, 2023), Date::new(1, 1, 2023))]
    #[case(Date::new(29, 2, 2024), Date::new(1, 2, 2024))]
    #[case(Date::new(15, 6, 2023), Date::new(16, 6, 2023))]
    fn test_next_day_legacy(#[case] date: Date, #[case] expected: Date) {
        assert_eq!(Ok(expected), next_day_with(&date, Rollover::Legacy));
    }

    #[test]
    fn test_strict_is_default() {
        assert_eq!(Rollover::Strict, Rollover::default());
    }

    #[test]
    fn test_non_last_day_only_increments_day() {
        for (year, month) in iproduct!([1538, 1900, 2000, 2023, 2024], 1..=12) {
            let last = days_in_month(month, year).unwrap();
            for day in 1..last {
                let date = Date::new(day, month, year);
                assert_eq!(Ok(Date::new(day + 1, month, year)), next_day(&date));
            }
        }
    }

    #[rstest]
    #[case(Date::new(31, 12, i32::MAX), Rollover::Strict)]
    #[case(Date::new(31, 12, i32::MAX), Rollover::Legacy)]
    #[case(Date::new(15, 12, i32::MAX), Rollover::Legacy)]
    fn test_next_day_year_overflow(#[case] date: Date, #[case] rollover: Rollover) {
        assert_eq!(
            Err(DateError::YearOverflow { date }),
            next_day_with(&date, rollover)
        );
    }

    #[test]
    fn test_last_representable_year_mid_december() {
        assert_eq!(
            Ok(Date::new(16, 12, i32::MAX)),
            next_day(&Date::new(15, 12, i32::MAX))
        );
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            Err(DateError::InvalidMonth { month: 0 }),
            next_day(&Date::new(1, 0, 2023))
        );
    }

    /// Walks every valid date in the default year range and checks against chrono.
    #[test]
    fn test_matches_chrono() {
        let ranges = DateRanges::default();
        let years = ranges.year.min()..=ranges.year.max();

        for (year, month, day) in iproduct!(years, 1..=12, 1..=31) {
            let date = Date::new(day, month, year);
            if validate_date(&date, &ranges).is_err() || validate_calendar_date(&date).is_err() {
                continue;
            }
            let expected = NaiveDate::try_from(date)
                .unwrap()
                .succ_opt()
                .map(Date::from)
                .unwrap();
            assert_eq!(Ok(expected), next_day(&date), "next day of {date}");
        }
    }
}
