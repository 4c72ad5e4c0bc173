use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday that is `days` days after a Monday. Negative values count backwards.
    pub(crate) const fn from_days_after_monday(days: i32) -> Self {
        // rem_euclid keeps the index in 0..7
        #[allow(clippy::cast_sign_loss)]
        let index = days.rem_euclid(7) as usize;
        Self::ALL[index]
    }

    /// Monday = 0 through Sunday = 6
    pub const fn number_days_from_monday(self) -> u8 {
        self as u8
    }

    /// Monday = 1 through Sunday = 7 (ISO 8601 numbering)
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// The following day, wrapping Sunday to Monday
    pub const fn succ(self) -> Self {
        Self::from_days_after_monday(self as i32 + 1)
    }

    /// The preceding day, wrapping Monday to Sunday
    pub const fn pred(self) -> Self {
        Self::from_days_after_monday(self as i32 - 1)
    }
}
