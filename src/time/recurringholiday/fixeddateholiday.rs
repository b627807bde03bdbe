use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;
use crate::time::utility::days_of_month;

/// Holiday on the same month and day every year, e.g. July 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Returns `None` unless `day` exists in `month` of a leap year.
    pub fn new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        // 2000 is a leap year, so Feb 29 is accepted here
        if day == 0 || day > days_of_month(2000, month) {
            None
        } else {
            Some(FixedDateHoliday { month, day })
        }
    }

    /// Unchecked constructor for the built-in rule tables.
    pub(crate) const fn from_table(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
