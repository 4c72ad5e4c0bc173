//! The 16-bit wire form of a [`Date20`].
//!
//! Layout, most significant bit first:
//!
//! ```text
//!  15            9 8      5 4        0
//! +---------------+--------+----------+
//! | year - 1900   | month  |   day    |
//! +---------------+--------+----------+
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CorruptReason, DAY_MASK, Date20, DateError, MAX_MONTH, MAX_YEAR, MIN_YEAR, MONTH_MASK, MONTH_SHIFT,
    Overflow, ParseError, YEAR_MASK, YEAR_SHIFT, prelude::*, types::days_in_month,
};

/// A packed date word. Any bit pattern can be held; [`EncodedDate20::decode`]
/// is where validity is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub struct EncodedDate20(u16);

impl EncodedDate20 {
    /// Wraps raw bits without checking them
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Packs a valid date. Total over every `Date20`.
    pub const fn encode(date: Date20) -> Self {
        let year = date.year_typed().offset() as u16;
        let month = date.month() as u16;
        let day = date.day() as u16;
        Self((year << YEAR_SHIFT) | (month << MONTH_SHIFT) | day)
    }

    /// Unpacks the word into a date.
    ///
    /// # Errors
    /// Returns `DateError::CorruptEncoding` when the fields do not describe a
    /// 20th century calendar date.
    pub fn decode(self) -> Result<Date20, DateError> {
        let (offset, month, day) = self.fields();

        if u16::from(offset) > MAX_YEAR - MIN_YEAR {
            return Err(self.corrupt(CorruptReason::YearOffset(offset)));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(self.corrupt(CorruptReason::Month(month)));
        }
        let year = MIN_YEAR + u16::from(offset);
        if day == 0 || day > days_in_month(year, month) {
            return Err(self.corrupt(CorruptReason::Day { year, month, day }));
        }

        Date20::new(year, month, day).map_err(|_| self.corrupt(CorruptReason::Day { year, month, day }))
    }

    /// Encodes raw components in one step.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the components are not a valid date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Date20::new(year, month, day).map(Self::encode)
    }

    /// Decodes into raw `(year, month, day)` components.
    ///
    /// # Errors
    /// Returns `DateError::CorruptEncoding` if the word does not decode.
    pub fn to_ymd(self) -> Result<(u16, u8, u8), DateError> {
        self.decode().map(Date20::to_ymd)
    }

    /// Shifts the encoded date by years, months and days and re-encodes it.
    ///
    /// # Errors
    /// See [`Date20::checked_add`]; a corrupt word fails before any arithmetic.
    pub fn checked_add(self, years: i32, months: i32, days: i64, overflow: Overflow) -> Result<Self, DateError> {
        self.decode()?
            .checked_add(years, months, days, overflow)
            .map(Self::encode)
    }

    /// Renders the encoded date as `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `DateError::CorruptEncoding` if the word does not decode.
    pub fn to_iso_string(self) -> Result<String, DateError> {
        self.decode().map(|date| date.to_string())
    }

    const fn fields(self) -> (u8, u8, u8) {
        // Masks keep every field within u8
        #[allow(clippy::cast_possible_truncation)]
        let fields = (
            ((self.0 >> YEAR_SHIFT) & YEAR_MASK) as u8,
            ((self.0 >> MONTH_SHIFT) & MONTH_MASK) as u8,
            (self.0 & DAY_MASK) as u8,
        );
        fields
    }

    fn corrupt(self, reason: CorruptReason) -> DateError {
        #[cfg(feature = "log")]
        log::debug!("rejecting encoded date {:#06x}: {reason}", self.0);
        DateError::CorruptEncoding { reason }
    }
}

impl From<Date20> for EncodedDate20 {
    fn from(date: Date20) -> Self {
        Self::encode(date)
    }
}

impl TryFrom<EncodedDate20> for Date20 {
    type Error = DateError;

    fn try_from(value: EncodedDate20) -> Result<Self, Self::Error> {
        value.decode()
    }
}

impl TryFrom<u32> for EncodedDate20 {
    type Error = DateError;

    /// Accepts a wider word; every bit above bit 15 is reserved.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u16::try_from(value).map(Self).map_err(|_| {
            #[cfg(feature = "log")]
            log::debug!("rejecting encoded date {value:#x}: reserved bits set");
            DateError::CorruptEncoding {
                reason: CorruptReason::ReservedBits(value),
            }
        })
    }
}

impl FromStr for EncodedDate20 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Date20>().map(Self::encode)
    }
}
