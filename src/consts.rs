/// Earliest representable year (inclusive)
pub const MIN_YEAR: u16 = 1900;
/// Latest representable year (inclusive)
pub const MAX_YEAR: u16 = 1999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a non-leap year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Ordinal of 1999-12-31 when 1900-01-01 is day 0
pub const MAX_ORDINAL: i32 = 36_523;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

// Bit layout of an encoded date: yyyyyyym mmmddddd
/// Shift of the 7-bit year offset
pub const YEAR_SHIFT: u32 = 9;
/// Shift of the 4-bit month
pub const MONTH_SHIFT: u32 = 5;
/// Mask of the year offset after shifting
pub const YEAR_MASK: u16 = 0x7F;
/// Mask of the month after shifting
pub const MONTH_MASK: u16 = 0x0F;
/// Mask of the day
pub const DAY_MASK: u16 = 0x1F;
