use crate::error::DateError;

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
///
/// A year divisible by 100 is a leap year only if it is also divisible by 400. Any other year is a
/// leap year if it is divisible by 4.
///
/// ```
/// use nextday::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    if year.rem_euclid(100) == 0 {
        return year.rem_euclid(400) == 0;
    }
    year.rem_euclid(4) == 0
}

/// Returns the number of days in `month` of `year`, with February resolved by [is_leap_year].
///
/// # Errors
///
/// - Returns a [DateError::InvalidMonth] if `month` is not between 1 and 12. Callers that have
///   already range-checked the month will never see this.
pub fn days_in_month(month: i32, year: i32) -> Result<i32, DateError> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return Err(DateError::InvalidMonth { month }),
    };
    Ok(days)
}
