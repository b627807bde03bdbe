use chrono::{
    Days,
    NaiveDate
};

use crate::time::calendarerror::{
    CalendarError,
    CalendarResult
};

/// Inclusive range `[start_date, end_date]` of calendar dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    /// Fails with [`CalendarError::InvalidRange`] when `start_date > end_date`;
    /// the bounds are never swapped.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> CalendarResult<RangeOfDates> {
        if start_date > end_date {
            Err(CalendarError::InvalidRange { start: start_date, end: end_date })
        } else {
            Ok(RangeOfDates { start_date, end_date })
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates
                .start_date()
                .checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range_of_dates.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iterates_inclusive_bounds() {
        let range = RangeOfDates::new(date(2024, 2, 27), date(2024, 3, 1)).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(
            range.to_vec(),
            vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
        assert!(range.contain(date(2024, 2, 29)));
        assert!(!range.contain(date(2024, 3, 2)));
    }

    #[test]
    fn single_day_range() {
        let d = date(2024, 6, 3);
        let range = RangeOfDates::new(d, d).unwrap();
        assert_eq!(range.to_vec(), vec![d]);
    }

    #[test]
    fn reversed_bounds_are_rejected() {
        let err = RangeOfDates::new(date(2024, 6, 10), date(2024, 6, 1)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidRange { start: date(2024, 6, 10), end: date(2024, 6, 1) }
        );
    }
}
