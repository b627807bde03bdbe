use chrono::NaiveDate;

use super::holidaycalendar::HolidayCalendar;

/// Caller-supplied holidays, copied and normalized to a sorted sequence
/// without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HolidayList {
    dates: Vec<NaiveDate>
}

impl HolidayList {
    pub fn new<I>(dates: I) -> HolidayList
    where
        I: IntoIterator<Item = NaiveDate>
    {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();
        HolidayList { dates }
    }

    pub fn empty() -> HolidayList {
        HolidayList::default()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayList {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        HolidayList::new(iter)
    }
}

impl From<&[NaiveDate]> for HolidayList {
    fn from(dates: &[NaiveDate]) -> Self {
        HolidayList::new(dates.iter().copied())
    }
}

impl HolidayCalendar for HolidayList {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.dates.binary_search(&d).is_ok()
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        if lo >= hi {
            Vec::new()
        } else {
            self.dates[lo..hi].to_vec()
        }
    }
}
