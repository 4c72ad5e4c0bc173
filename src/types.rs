use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::{DateError, Field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1900..=1999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in the 20th century
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` naming the year field if the value is
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::invalid(Field::Year, value));
        }
        NonZeroU16::new(value)
            .map(Self)
            .ok_or_else(|| DateError::invalid(Field::Year, value))
    }

    /// `value` must already be known to lie in `MIN_YEAR..=MAX_YEAR`
    pub(crate) const fn from_valid(value: u16) -> Self {
        debug_assert!(value >= MIN_YEAR && value <= MAX_YEAR);
        Self(NonZeroU16::MIN.saturating_add(value - 1))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Offset from `MIN_YEAR`, always in `0..=99`
    #[inline]
    pub const fn offset(self) -> u8 {
        // 1999 - 1900 fits in a u8
        #[allow(clippy::cast_possible_truncation)]
        let offset = (self.0.get() - MIN_YEAR) as u8;
        offset
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` naming the month field if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or_else(|| DateError::invalid(Field::Month, value))?;
        if value > MAX_MONTH {
            return Err(DateError::invalid(Field::Month, value));
        }
        Ok(Self(non_zero))
    }

    /// `value` must already be known to lie in `1..=MAX_MONTH`
    pub(crate) const fn from_valid(value: u8) -> Self {
        debug_assert!(value >= 1 && value <= MAX_MONTH);
        Self(NonZeroU8::MIN.saturating_add(value - 1))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` naming the day field if the value is 0
    /// or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or_else(|| DateError::invalid(Field::Day, value))?;
        if value > days_in_month(year.get(), month.get()) {
            return Err(DateError::invalid(Field::Day, value));
        }
        Ok(Self(non_zero))
    }

    /// `value` must already be known to exist in the month it is paired with
    pub(crate) const fn from_valid(value: u8) -> Self {
        debug_assert!(value >= MIN_DAY);
        Self(NonZeroU8::MIN.saturating_add(value - MIN_DAY))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the widest month can be checked
        if !(MIN_DAY..=DAYS_IN_MONTH[1]).contains(&value) {
            return Err(DateError::invalid(Field::Day, value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or_else(|| DateError::invalid(Field::Day, value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap year rule
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of `month` in `year`; `month` must be in `1..=12`
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
