use chrono::{Datelike, NaiveDate};


/// A holiday that recurs every year by a fixed calendar rule.
pub trait RecurringHoliday {

    /// Unadjusted occurrence of the holiday in `year`, if the rule yields one.
    fn get_holiday(&self, year: i32) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()) == Some(*d)
    }
}
