use crate::error::DateError;
use chrono::NaiveDate;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A day, month and year.
///
/// This is a plain value: nothing is checked when one is built. Use
/// [validate_date](crate::validate_date) and
/// [validate_calendar_date](crate::validate_calendar_date) to find out if it is a real date.
///
/// ```
/// use nextday::Date;
///
/// let date = Date::new(4, 7, 2021);
/// assert_eq!("2021-07-04", date.to_string());
///
/// let parsed: Date = "4 7 2021".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    /// Day of the month, 1-based.
    pub day: i32,
    /// Month of the year, 1-based.
    pub month: i32,
    /// Year.
    pub year: i32,
}

impl Date {
    /// Returns a new [Date]. Arguments are in day, month, year order.
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl Display for Date {
    /// Renders as `YYYY-MM-DD`. Month and day are zero-padded to 2 digits, the year to 4.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses exactly three whitespace-separated integers, in day, month, year order. Values are
    /// not validated beyond being integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::MalformedInput {
            input: s.trim().to_owned(),
        };

        let fields = s
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| malformed())?;

        match fields.as_slice() {
            [day, month, year] => Ok(Self::new(*day, *month, *year)),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<Date> for NaiveDate {
    type Error = DateError;

    /// Converts to a chrono [NaiveDate], for interop with the rest of the chrono ecosystem.
    ///
    /// # Errors
    ///
    /// - Returns a [DateError::InvalidMonth] or [DateError::DayNotInMonth] when the date does not
    ///   exist.
    fn try_from(date: Date) -> Result<Self, Self::Error> {
        let month = u32::try_from(date.month).map_err(|_| DateError::InvalidMonth {
            month: date.month,
        })?;
        let day = u32::try_from(date.day).ok();

        day.and_then(|day| NaiveDate::from_ymd_opt(date.year, month, day))
            .ok_or_else(|| match crate::calendar::days_in_month(date.month, date.year) {
                Ok(max_day) => DateError::DayNotInMonth {
                    day: date.day,
                    month: date.month,
                    year: date.year,
                    max_day,
                },
                Err(e) => e,
            })
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        // month and day are at most 12 and 31
        Self::new(date.day() as i32, date.month() as i32, date.year())
    }
}
