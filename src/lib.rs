mod consts;
mod encoded;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod weekday;

pub use consts::*;
pub use encoded::EncodedDate20;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use weekday::Weekday;

use crate::consts::DAYS_BEFORE_MONTH;
use crate::prelude::*;
use serde::Deserialize;
use std::cmp::Ordering;
use std::str::FromStr;

/// A calendar date between 1900-01-01 and 1999-12-31 inclusive.
/// Every value is a valid proleptic Gregorian date; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date20 {
    // Field order gives the derived Ord its chronological meaning
    year:  Year,
    month: Month,
    day:   Day,
}

/// Which component of a date failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Why an encoded word does not decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CorruptReason {
    #[display(fmt = "reserved bits set in {:#x}", "_0")]
    ReservedBits(u32),
    #[display(fmt = "year offset {} is past {}", "_0", "MAX_YEAR - MIN_YEAR")]
    YearOffset(u8),
    #[display(fmt = "month field {} is not 1-{}", "_0", MAX_MONTH)]
    Month(u8),
    #[display(fmt = "day field {day} does not exist in {year}-{month:02}")]
    Day { year: u16, month: u8, day: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A component is outside its range, or the day is past the end of the month.
    #[error("Invalid {field}: {value}")]
    InvalidDate { field: Field, value: i64 },

    /// An encoded word does not correspond to any date.
    #[error("Corrupt encoded date: {reason}")]
    CorruptEncoding { reason: CorruptReason },

    /// Arithmetic left the 1900-1999 window. `ordinal` counts days from 1900-01-01.
    #[error("Date out of range: ordinal {ordinal} is not in 0-{}", MAX_ORDINAL)]
    OutOfRange { ordinal: i64 },
}

impl DateError {
    pub(crate) fn invalid(field: Field, value: impl Into<i64>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    fn out_of_range(ordinal: i64) -> Self {
        #[cfg(feature = "log")]
        log::debug!("date arithmetic left the century at ordinal {ordinal}");
        Self::OutOfRange { ordinal }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    InvalidDate(DateError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::InvalidFormat(_) | Self::EmptyInput => None,
        }
    }
}

impl From<DateError> for ParseError {
    fn from(err: DateError) -> Self {
        Self::InvalidDate(err)
    }
}

/// What to do with a day-of-month that does not exist after a month shift
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// Clamp to the last day of the target month
    #[default]
    Constrain,
    /// Fail with `DateError::InvalidDate`
    Reject,
}

impl Date20 {
    /// 1900-01-01
    pub const MIN: Self = Self::from_ordinal_unchecked(0);
    /// 1999-12-31
    pub const MAX: Self = Self::from_ordinal_unchecked(MAX_ORDINAL);

    /// Creates a date, validating year, month and day in that order.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` naming the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (1900-1999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)`
    pub const fn to_ymd(self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Day of the year, 1-based
    pub const fn day_of_year(&self) -> u16 {
        let mut days = DAYS_BEFORE_MONTH[self.month() as usize] + self.day() as u16;
        if self.month() > FEBRUARY && self.is_leap_year() {
            days += 1;
        }
        days
    }

    /// Packs the date into its 16-bit form
    pub const fn encode(self) -> EncodedDate20 {
        EncodedDate20::encode(self)
    }

    /// Days since 1900-01-01; 1900-01-01 is 0 and 1999-12-31 is `MAX_ORDINAL`.
    pub const fn to_ordinal(self) -> i32 {
        let days = days_before_year(self.year() as i64) - days_before_year(MIN_YEAR as i64);
        // At most MAX_ORDINAL
        #[allow(clippy::cast_possible_truncation)]
        let ordinal = days as i32 + self.day_of_year() as i32 - 1;
        ordinal
    }

    /// Inverse of [`Date20::to_ordinal`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the ordinal is outside `0..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, DateError> {
        match i32::try_from(ordinal) {
            Ok(days) if (0..=MAX_ORDINAL).contains(&days) => Ok(Self::from_ordinal_unchecked(days)),
            _ => Err(DateError::out_of_range(ordinal)),
        }
    }

    /// `ordinal` must be in `0..=MAX_ORDINAL`
    const fn from_ordinal_unchecked(ordinal: i32) -> Self {
        debug_assert!(ordinal >= 0 && ordinal <= MAX_ORDINAL);

        let ordinal = ordinal as i64;
        let epoch = days_before_year(MIN_YEAR as i64);
        // 365 days per year overshoots by at most one year
        let mut year = MIN_YEAR as i64 + ordinal / 365;
        while days_before_year(year) - epoch > ordinal {
            year -= 1;
        }

        // Bounded by the ordinal range above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, mut remaining) = (year as u16, (ordinal - (days_before_year(year) - epoch)) as u16);

        let mut month = JANUARY;
        while month < DECEMBER && remaining >= days_in_month(year, month) as u16 {
            remaining -= days_in_month(year, month) as u16;
            month += 1;
        }

        #[allow(clippy::cast_possible_truncation)]
        let day = remaining as u8 + MIN_DAY;
        Self {
            year:  Year::from_valid(year),
            month: Month::from_valid(month),
            day:   Day::from_valid(day),
        }
    }

    /// Day of the week; 1900-01-01 was a Monday.
    pub const fn weekday(self) -> Weekday {
        Weekday::from_days_after_monday(self.to_ordinal())
    }

    /// Signed number of days from `self` to `other` (`other - self`).
    pub const fn days_between(self, other: Self) -> i32 {
        other.to_ordinal() - self.to_ordinal()
    }

    /// Chronological comparison, same as `Ord::cmp`
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Adds a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is outside 1900-1999.
    pub fn checked_add_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_ordinal(i64::from(self.to_ordinal()).saturating_add(days))
    }

    /// Subtracts a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is outside 1900-1999.
    pub fn checked_sub_days(self, days: i64) -> Result<Self, DateError> {
        Self::from_ordinal(i64::from(self.to_ordinal()).saturating_sub(days))
    }

    /// Shifts by whole years, months and then days.
    ///
    /// The year/month pair moves first; a day that no longer exists in the
    /// target month is handled by `overflow`. The day offset is applied last.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the target year or final date leaves
    /// the century, and `DateError::InvalidDate` under `Overflow::Reject` when
    /// the day does not exist in the target month.
    pub fn checked_add(self, years: i32, months: i32, days: i64, overflow: Overflow) -> Result<Self, DateError> {
        let total_months = i64::from(self.year()) * 12
            + i64::from(self.month() - 1)
            + i64::from(years) * 12
            + i64::from(months);
        let year = total_months.div_euclid(12);
        let month = total_months.rem_euclid(12) + 1;

        let Some(year) = u16::try_from(year).ok().and_then(|y| Year::new(y).ok()) else {
            // Report the first of the target year
            let ordinal = days_before_year(year) - days_before_year(i64::from(MIN_YEAR));
            return Err(DateError::out_of_range(ordinal));
        };
        let month = u8::try_from(month)
            .map_err(|_| DateError::invalid(Field::Month, month))
            .and_then(Month::new)?;

        let last = days_in_month(year.get(), month.get());
        let day = match overflow {
            Overflow::Constrain => self.day().min(last),
            Overflow::Reject => self.day(),
        };
        let day = Day::new(day, year, month)?;

        Self { year, month, day }.checked_add_days(days)
    }

    /// Shifts by whole months, constraining the day to the target month.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the century.
    pub fn checked_add_months(self, months: i32) -> Result<Self, DateError> {
        self.checked_add(0, months, 0, Overflow::Constrain)
    }

    /// Shifts by whole years, constraining February 29th to the 28th.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the century.
    pub fn checked_add_years(self, years: i32) -> Result<Self, DateError> {
        self.checked_add(years, 0, 0, Overflow::Constrain)
    }
}

/// Days from 0001-01-01 to January 1st of `year`
const fn days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

impl FromStr for Date20 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {trimmed}"
            )));
        };

        let year = Self::parse_component::<u16>(year, 4)?;
        let month = Self::parse_component::<u8>(month, 2)?;
        let day = Self::parse_component::<u8>(day, 2)?;

        Ok(Self::new(year, month, day)?)
    }
}

impl Date20 {
    /// Parses one numeric component of at most `width` ASCII digits
    fn parse_component<T: FromStr>(s: &str, width: usize) -> Result<T, ParseError> {
        if s.is_empty() || s.len() > width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for Date20 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date20 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_construct_boundaries() {
        struct TestCase {
            ymd:            (u16, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                ymd:            (1900, 1, 1),
                should_succeed: true,
                description:    "first day of the century",
            },
            TestCase {
                ymd:            (1900, 2, 29),
                should_succeed: false,
                description:    "1900 is not a leap year",
            },
            TestCase {
                ymd:            (1996, 2, 29),
                should_succeed: true,
                description:    "1996 is a leap year",
            },
            TestCase {
                ymd:            (1997, 2, 29),
                should_succeed: false,
                description:    "1997 is not a leap year",
            },
            TestCase {
                ymd:            (1999, 12, 31),
                should_succeed: true,
                description:    "last day of the century",
            },
            TestCase {
                ymd:            (2000, 1, 1),
                should_succeed: false,
                description:    "2000 is out of range",
            },
            TestCase {
                ymd:            (1899, 12, 31),
                should_succeed: false,
                description:    "1899 is out of range",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            let result = Date20::new(y, m, d);
            assert_eq!(result.is_ok(), case.should_succeed, "{}", case.description);
        }
    }

    #[test]
    fn test_construct_reports_first_failing_field() {
        assert_eq!(
            Date20::new(2000, 13, 40),
            Err(DateError::InvalidDate {
                field: Field::Year,
                value: 2000
            })
        );
        assert_eq!(
            Date20::new(1950, 13, 40),
            Err(DateError::InvalidDate {
                field: Field::Month,
                value: 13
            })
        );
        assert_eq!(
            Date20::new(1950, 6, 31),
            Err(DateError::InvalidDate {
                field: Field::Day,
                value: 31
            })
        );
    }

    #[test]
    fn test_construct_matches_days_in_month_everywhere() {
        for y in MIN_YEAR..=MAX_YEAR {
            for m in 1..=12 {
                let last = days_in_month(y, m);
                for d in 1..=31 {
                    assert_eq!(Date20::new(y, m, d).is_ok(), d <= last, "{y}-{m:02}-{d:02}");
                }
            }
        }
    }

    #[test]
    fn test_from_parts_and_accessors() {
        use crate::test_utils::{month, year};

        let d = date(1996, 2, 29);
        let rebuilt = Date20::from_parts(d.year_typed(), d.month_typed(), d.day_typed()).unwrap();
        assert_eq!(rebuilt, d);
        assert_eq!(d.to_ymd(), (1996, 2, 29));
        assert!(d.is_leap_year());

        // A day that was valid in one month is re-checked against the new one
        assert!(Date20::from_parts(year(1997), month(2), d.day_typed()).is_err());
    }

    #[test]
    fn test_ordinal_bounds() {
        assert_eq!(Date20::MIN, date(1900, 1, 1));
        assert_eq!(Date20::MAX, date(1999, 12, 31));
        assert_eq!(Date20::MIN.to_ordinal(), 0);
        assert_eq!(Date20::MAX.to_ordinal(), MAX_ORDINAL);
        assert_eq!(date(1901, 1, 1).to_ordinal(), 365);
        assert_eq!(date(1905, 1, 1).to_ordinal(), 365 * 5 + 1);
    }

    #[test]
    fn test_ordinal_round_trip_every_day() {
        let mut previous: Option<Date20> = None;
        for ordinal in 0..=MAX_ORDINAL {
            let d = Date20::from_ordinal(i64::from(ordinal)).unwrap();
            assert_eq!(d.to_ordinal(), ordinal);
            if let Some(p) = previous {
                assert!(p < d, "{p} should precede {d}");
            }
            previous = Some(d);
        }
    }

    #[test]
    fn test_from_ordinal_out_of_range() {
        assert_eq!(Date20::from_ordinal(-1), Err(DateError::OutOfRange { ordinal: -1 }));
        assert_eq!(
            Date20::from_ordinal(i64::from(MAX_ORDINAL) + 1),
            Err(DateError::OutOfRange {
                ordinal: i64::from(MAX_ORDINAL) + 1
            })
        );
        assert!(Date20::from_ordinal(i64::MAX).is_err());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(1900, 1, 1).day_of_year(), 1);
        assert_eq!(date(1900, 12, 31).day_of_year(), 365);
        assert_eq!(date(1996, 3, 1).day_of_year(), 61);
        assert_eq!(date(1996, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn test_weekday_anchors() {
        struct TestCase {
            ymd:     (u16, u8, u8),
            weekday: Weekday,
        }

        let cases = [
            TestCase {
                ymd:     (1900, 1, 1),
                weekday: Weekday::Monday,
            },
            TestCase {
                ymd:     (1900, 1, 7),
                weekday: Weekday::Sunday,
            },
            TestCase {
                ymd:     (1941, 12, 7),
                weekday: Weekday::Sunday,
            },
            TestCase {
                ymd:     (1969, 7, 20),
                weekday: Weekday::Sunday,
            },
            TestCase {
                ymd:     (1970, 1, 1),
                weekday: Weekday::Thursday,
            },
            TestCase {
                ymd:     (1999, 12, 31),
                weekday: Weekday::Friday,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.ymd;
            assert_eq!(date(y, m, d).weekday(), case.weekday, "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_days_between() {
        let a = date(1900, 1, 1);
        let b = date(1900, 1, 2);
        assert_eq!(a.days_between(b), 1);
        assert_eq!(b.days_between(a), -1);
        assert_eq!(a.days_between(a), 0);
        assert_eq!(Date20::MIN.days_between(Date20::MAX), MAX_ORDINAL);
        assert_eq!(date(1970, 1, 1).days_between(date(1999, 12, 31)), 10_956);
    }

    #[test]
    fn test_days_between_agrees_with_ordering() {
        let dates = [
            date(1900, 1, 1),
            date(1900, 2, 28),
            date(1900, 3, 1),
            date(1950, 6, 15),
            date(1996, 2, 29),
            date(1999, 12, 31),
        ];
        for a in &dates {
            for b in &dates {
                let diff = a.days_between(*b);
                assert_eq!(diff, -b.days_between(*a));
                assert_eq!(diff > 0, a.compare(b) == Ordering::Less, "{a} vs {b}");
                assert_eq!(diff == 0, a.compare(b) == Ordering::Equal, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_add_days_identity_and_inverse() {
        let d = date(1950, 6, 15);
        assert_eq!(d.checked_add_days(0).unwrap(), d);

        for n in [1, 30, 365, 366, 10_000, -1, -10_000] {
            let shifted = d.checked_add_days(n).unwrap();
            assert_eq!(shifted.checked_add_days(-n).unwrap(), d, "offset {n}");
            assert_eq!(shifted.checked_sub_days(n).unwrap(), d, "offset {n}");
        }
    }

    #[test]
    fn test_add_days_crosses_february() {
        assert_eq!(date(1900, 2, 28).checked_add_days(1).unwrap(), date(1900, 3, 1));
        assert_eq!(date(1996, 2, 28).checked_add_days(1).unwrap(), date(1996, 2, 29));
        assert_eq!(date(1996, 12, 31).checked_add_days(1).unwrap(), date(1997, 1, 1));
    }

    #[test]
    fn test_add_days_out_of_range() {
        let last = date(1999, 12, 31);
        assert!(matches!(last.checked_add_days(1), Err(DateError::OutOfRange { .. })));

        let first = date(1900, 1, 1);
        assert!(matches!(first.checked_add_days(-1), Err(DateError::OutOfRange { .. })));

        assert!(matches!(first.checked_add_days(i64::MAX), Err(DateError::OutOfRange { .. })));
        assert!(matches!(last.checked_add_days(i64::MIN), Err(DateError::OutOfRange { .. })));
    }

    #[test]
    fn test_checked_add_month_end() {
        let jan31 = date(1995, 1, 31);
        assert_eq!(jan31.checked_add_months(1).unwrap(), date(1995, 2, 28));
        assert_eq!(jan31.checked_add(0, 1, 0, Overflow::Constrain).unwrap(), date(1995, 2, 28));
        assert_eq!(
            jan31.checked_add(0, 1, 0, Overflow::Reject),
            Err(DateError::InvalidDate {
                field: Field::Day,
                value: 31
            })
        );
        assert_eq!(date(1996, 1, 31).checked_add_months(1).unwrap(), date(1996, 2, 29));
    }

    #[test]
    fn test_checked_add_balances_months() {
        let d = date(1950, 11, 15);
        assert_eq!(d.checked_add_months(2).unwrap(), date(1951, 1, 15));
        assert_eq!(d.checked_add_months(-11).unwrap(), date(1949, 12, 15));
        assert_eq!(d.checked_add_months(-23).unwrap(), date(1948, 12, 15));
        assert_eq!(d.checked_add(1, -12, 0, Overflow::Reject).unwrap(), d);
        assert_eq!(d.checked_add(0, 0, 17, Overflow::Reject).unwrap(), date(1950, 12, 2));
    }

    #[test]
    fn test_checked_add_years() {
        assert_eq!(date(1996, 2, 29).checked_add_years(1).unwrap(), date(1997, 2, 28));
        assert_eq!(date(1992, 2, 29).checked_add_years(4).unwrap(), date(1996, 2, 29));
        assert!(matches!(
            date(1996, 2, 29).checked_add_years(4),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(matches!(
            date(1900, 5, 1).checked_add(0, -5, 0, Overflow::Constrain),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(matches!(
            date(1950, 5, 1).checked_add(i32::MAX, i32::MAX, 0, Overflow::Constrain),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_checked_add_days_applied_last() {
        // 1999-11-30 + 1 month = 1999-12-30, then + 1 day stays in range
        let d = date(1999, 11, 30);
        assert_eq!(d.checked_add(0, 1, 1, Overflow::Reject).unwrap(), date(1999, 12, 31));
        assert!(matches!(
            d.checked_add(0, 1, 2, Overflow::Reject),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1905, 3, 7).to_string(), "1905-03-07");
        assert_eq!(date(1999, 12, 31).to_string(), "1999-12-31");
    }

    #[test]
    fn test_parse() {
        assert_eq!("1991-08-15".parse::<Date20>().unwrap(), date(1991, 8, 15));
        assert_eq!(" 1991-8-5 ".parse::<Date20>().unwrap(), date(1991, 8, 5));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Date20>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<Date20>(), Err(ParseError::EmptyInput));

        for input in ["1991", "1991-08", "1991-08-15-01", "08/15/1991", "1991-aa-15", "19910-08-15", "1991-008-15", "1991--15", "+991-08-15"] {
            assert!(
                matches!(input.parse::<Date20>(), Err(ParseError::InvalidFormat(_))),
                "{input} should be a format error"
            );
        }

        assert_eq!(
            "2000-01-01".parse::<Date20>(),
            Err(ParseError::InvalidDate(DateError::InvalidDate {
                field: Field::Year,
                value: 2000
            }))
        );
        assert_eq!(
            "1900-02-29".parse::<Date20>(),
            Err(ParseError::InvalidDate(DateError::InvalidDate {
                field: Field::Day,
                value: 29
            }))
        );
    }

    #[test]
    fn test_text_round_trip() {
        for d in [Date20::MIN, date(1941, 12, 7), date(1996, 2, 29), Date20::MAX] {
            assert_eq!(d.to_string().parse::<Date20>().unwrap(), d);
        }
    }

    #[test]
    fn test_serde() {
        let d = date(1969, 7, 20);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"1969-07-20\"");

        let parsed: Date20 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<Date20>("\"2001-01-01\"").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = Date20::new(1900, 2, 29).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day: 29");

        let err = DateError::CorruptEncoding {
            reason: CorruptReason::Month(13),
        };
        assert_eq!(err.to_string(), "Corrupt encoded date: month field 13 is not 1-12");

        let err = Date20::MAX.checked_add_days(1).unwrap_err();
        assert_eq!(err.to_string(), "Date out of range: ordinal 36524 is not in 0-36523");
    }
}
