use std::sync::Arc;

use chrono::NaiveDate;

/// Source of holiday membership, independent of the weekend definition.
pub trait HolidayCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// Holidays within `[start, end]`, ascending and without duplicates.
    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate>;
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for &T {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        (**self).is_holiday(d)
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        (**self).holidays_between(start, end)
    }
}

impl<T: HolidayCalendar + ?Sized> HolidayCalendar for Arc<T> {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        (**self).is_holiday(d)
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        (**self).holidays_between(start, end)
    }
}
