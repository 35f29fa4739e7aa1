use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

pub const BIRTH_DATE: BirthDate = BirthDate {
    year: 2007,
    month: 12,
    day: 31,
};

/// Age in whole years on `today`.
pub fn age_on(birth: BirthDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year;
    if today.month() < birth.month || (today.month() == birth.month && today.day() < birth.day) {
        age -= 1;
    }
    age.max(0) as u32
}
