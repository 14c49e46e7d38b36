use crate::error::DateError;
use core::fmt::{self, Display};

/// An inclusive range of integers, `[min, max]`.
///
/// Ranges are immutable once constructed, and `min` is never greater than `max`.
///
/// ```
/// use nextday::Range;
///
/// let months = Range::new(1, 12).unwrap();
/// assert!(months.contains(12));
/// assert!(!months.contains(13));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    min: i32,
    max: i32,
}

impl Range {
    /// Returns a new [Range] from `min` to `max`, both inclusive.
    ///
    /// # Errors
    ///
    /// - Returns a [DateError::EmptyRange] if `min` is greater than `max`.
    pub fn new(min: i32, max: i32) -> Result<Self, DateError> {
        if min > max {
            return Err(DateError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Const constructor for ranges known to be well-formed at compile time.
    pub(crate) const fn new_unchecked(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Returns the inclusive lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Returns the inclusive upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns true if `value` is between [Self::min] and [Self::max], inclusively.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.min, self.max)
    }
}

/// Returns true if `value` is between `range.min()` and `range.max()`, inclusively.
///
/// Free-function form of [Range::contains].
pub fn is_in_range(range: &Range, value: i32) -> bool {
    range.contains(value)
}
