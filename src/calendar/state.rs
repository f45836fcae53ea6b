use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::language::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// The month being shown and the language it is shown in.
///
/// `month` is zero-based and always kept in `0..=11`; stepping past either end
/// carries into `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarState {
    pub year: i32,
    pub month: u32,
    pub language: LanguageCode,
}

impl CalendarState {
    pub fn new(year: i32, month: i64, language: LanguageCode) -> Self {
        let (year, month) = normalize(year, month);
        Self { year, month, language }
    }

    pub fn for_date(date: NaiveDate, language: LanguageCode) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            language,
        }
    }

    pub fn advance(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Previous => -1,
            Direction::Next => 1,
        };
        let (year, month) = normalize(self.year, i64::from(self.month) + delta);
        self.year = year;
        self.month = month;
    }

    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.year = date.year();
        self.month = date.month0();
    }

    pub fn shows(&self, date: NaiveDate) -> bool {
        self.year == date.year() && self.month == date.month0()
    }
}

/// Folds an arbitrary month offset into `0..=11`, carrying whole years.
///
/// Results past the `i32` year range stop at January of `i32::MIN` or
/// December of `i32::MAX`, so stepping beyond either end leaves the month as is.
pub fn normalize(year: i32, month: i64) -> (i32, u32) {
    const FIRST: i64 = i32::MIN as i64 * 12;
    const LAST: i64 = i32::MAX as i64 * 12 + 11;

    let index = (i64::from(year) * 12).saturating_add(month).clamp(FIRST, LAST);
    (index.div_euclid(12) as i32, index.rem_euclid(12) as u32)
}
