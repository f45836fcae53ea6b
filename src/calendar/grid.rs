use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

pub const DAYS_PER_WEEK: usize = 7;

const MONTH_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day_number: u32,
    pub belongs_to_current_month: bool,
    pub is_today: bool,
}

impl DayCell {
    fn filler(day_number: u32) -> Self {
        Self {
            day_number,
            belongs_to_current_month: false,
            is_today: false,
        }
    }

    fn current(day_number: u32, is_today: bool) -> Self {
        Self {
            day_number,
            belongs_to_current_month: true,
            is_today,
        }
    }
}

pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a zero-based `month` of `year`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Weekday index (0 = Sunday) of the first day of a zero-based `month`.
///
/// Sakamoto's method with Euclidean division so negative years stay correct.
pub fn first_weekday(year: i64, month: u32) -> u32 {
    let y = if month < 2 { year - 1 } else { year };
    let raw = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + MONTH_OFFSETS[month as usize % 12]
        + 1;
    raw.rem_euclid(7) as u32
}

/// Builds the 42 cells shown for `(year, month)`, Sunday first.
///
/// `month` is zero-based and must already be normalized into `0..=11`.
pub fn generate_grid(year: i32, month: u32, today: NaiveDate) -> Vec<DayCell> {
    let year = i64::from(year);
    let month = month % 12;

    let leading = first_weekday(year, month);
    let days = days_in_month(year, month);
    let (prev_year, prev_month) = if month == 0 { (year - 1, 11) } else { (year, month - 1) };
    let days_in_prev = days_in_month(prev_year, prev_month);

    let today_day = (i64::from(today.year()) == year && today.month0() == month)
        .then(|| today.day());

    let mut cells = Vec::with_capacity(GRID_CELLS);

    cells.extend((days_in_prev - leading + 1..=days_in_prev).map(DayCell::filler));
    cells.extend((1..=days).map(|day| DayCell::current(day, today_day == Some(day))));

    let trailing = GRID_CELLS - cells.len();
    cells.extend((1..=trailing as u32).map(DayCell::filler));

    cells
}
