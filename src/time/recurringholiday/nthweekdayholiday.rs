use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::end_of_month;

/// Holiday on the n-th given weekday of a month.
///
/// Positive `n` counts from the first of the month (`1` = first occurrence),
/// negative `n` counts backwards from the last day (`-1` = last occurrence).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: i8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub fn new(month: u32, n: i8, weekday: Weekday) -> Option<NthWeekdayHoliday> {
        if !(1..=12).contains(&month) || n == 0 || !(-5..=5).contains(&n) {
            None
        } else {
            Some(NthWeekdayHoliday { month, n, weekday })
        }
    }

    /// Unchecked constructor for the built-in rule tables.
    pub(crate) const fn from_table(month: u32, n: i8, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, n, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> i8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    fn get_from_end(&self, year: i32) -> Option<NaiveDate> {
        let eom = end_of_month(year, self.month)?;

        // Days to go back from the end of month to reach the target weekday
        let days_back = (eom.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        let weeks_back = (self.n.unsigned_abs() as u64 - 1) * 7;

        eom.checked_sub_days(Days::new(days_back as u64 + weeks_back))
            .filter(|d| d.month() == self.month)
    }
}

impl RecurringHoliday for NthWeekdayHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        if self.n > 0 {
            NaiveDate::from_weekday_of_month_opt(
                year,
                self.month,
                self.weekday,
                self.n as u8
            )
        } else {
            self.get_from_end(year)
        }
    }
}
