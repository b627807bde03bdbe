use chrono::NaiveDate;

use crate::time::recurringholiday::holidayrule::NamedHoliday;

/// Holidays of one nominal year, sorted by date then name.
///
/// Immutable once built; shared out of the cache behind `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidaySet {
    year: i32,
    holidays: Vec<NamedHoliday>
}

impl HolidaySet {
    pub fn new(year: i32, mut holidays: Vec<NamedHoliday>) -> HolidaySet {
        holidays.sort();
        HolidaySet { year, holidays }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn holidays(&self) -> &[NamedHoliday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Independent copy of the holidays.
    pub fn to_vec(&self) -> Vec<NamedHoliday> {
        self.holidays.clone()
    }

    /// Dates in ascending order; two rules landing on one date yield it twice.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().map(|h| h.date())
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.holidays.binary_search_by_key(&d, |h| h.date()).is_ok()
    }

    pub fn get(&self, name: &str) -> Option<NaiveDate> {
        self.holidays.iter().find(|h| h.name() == name).map(|h| h.date())
    }
}
