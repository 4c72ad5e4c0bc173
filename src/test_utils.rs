use crate::{Date20, Month, Year};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year should be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month should be valid")
}

pub fn date(year: u16, month: u8, day: u8) -> Date20 {
    Date20::new(year, month, day).expect("test date should be valid")
}
