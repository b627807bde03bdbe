use chrono::{
    Datelike,
    NaiveDate
};

use super::holidaycalendar::HolidayCalendar;
use super::holidaycache::RwLockHolidayCache;
use super::rulecalendar::RuleCalendar;
use super::weekendmask::WeekendMask;
use crate::time::calendarerror::{
    CalendarError,
    CalendarResult
};
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::end_of_month;

/// Most consecutive non-business days a single navigation step may skip.
pub const MAX_SEARCH_DAYS: u32 = 3660;

/// Weekend definition plus a holiday source: decides business days and does
/// counting and navigation over them.
#[derive(Clone, Debug)]
pub struct BusinessDayCalendar<H: HolidayCalendar> {
    weekends: WeekendMask,
    holidays: H
}

impl<H: HolidayCalendar> BusinessDayCalendar<H> {
    /// Saturday and Sunday weekend.
    pub fn new(holidays: H) -> Self {
        Self::with_weekends(WeekendMask::default(), holidays)
    }

    pub fn with_weekends(weekends: WeekendMask, holidays: H) -> Self {
        Self { weekends, holidays }
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend_date(d)
    }

    pub fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.is_holiday(d)
    }

    pub fn is_business_day(&self, d: NaiveDate) -> bool {
        // weekends first, they need no holiday lookup
        !self.is_weekend(d) && !self.holidays.is_holiday(d)
    }

    // ── Counting ────────────────────────────────────────────────────────────

    /// Number of business days in `[start, end]`, both ends included.
    ///
    /// Weekdays are counted in whole-week blocks plus a remainder shorter
    /// than a week; the range's holidays are fetched once and those not
    /// already on a weekend are subtracted.
    pub fn workdays_between(&self, start: NaiveDate, end: NaiveDate) -> CalendarResult<i64> {
        let range = RangeOfDates::new(start, end)?;
        let total = range.len() as i64;

        let full_weeks = total / 7;
        let mut count = full_weeks * (7 - self.weekends.count() as i64);

        // The remainder starts on the same weekday as `start`.
        let mut weekday = start.weekday();
        for _ in 0..total % 7 {
            count += !self.weekends.is_weekend(weekday) as i64;
            weekday = weekday.succ();
        }

        let holidays_on_workdays = self.holidays
            .holidays_between(start, end)
            .into_iter()
            .filter(|d| !self.is_weekend(*d))
            .count() as i64;

        Ok(count - holidays_on_workdays)
    }

    /// Business days of `[start, end]` in ascending order.
    pub fn business_days(&self, start: NaiveDate, end: NaiveDate) -> CalendarResult<Vec<NaiveDate>> {
        let range = RangeOfDates::new(start, end)?;
        let holidays = self.holidays.holidays_between(start, end);
        Ok(range
            .iter()
            .filter(|d| !self.is_weekend(*d) && holidays.binary_search(d).is_err())
            .collect())
    }

    // ── Navigation ──────────────────────────────────────────────────────────

    fn step(d: NaiveDate, forward: bool) -> CalendarResult<NaiveDate> {
        let stepped = if forward { d.succ_opt() } else { d.pred_opt() };
        stepped.ok_or(CalendarError::DateOutOfRange(d))
    }

    /// First business day strictly after (or before) `from`.
    fn seek_business_day(&self, from: NaiveDate, forward: bool) -> CalendarResult<NaiveDate> {
        let mut d = from;
        for _ in 0..MAX_SEARCH_DAYS {
            d = Self::step(d, forward)?;
            if self.is_business_day(d) {
                return Ok(d);
            }
        }
        log::warn!("no business day within {} days of {}", MAX_SEARCH_DAYS, from);
        Err(CalendarError::SearchLimitExceeded { from, limit: MAX_SEARCH_DAYS })
    }

    /// Moves `n` business days away from `horizon`; negative `n` moves back.
    ///
    /// `horizon` itself is never counted, and `n == 0` returns it unchanged
    /// whether or not it is a business day.
    pub fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> CalendarResult<NaiveDate> {
        let forward = n >= 0;
        let mut d = horizon;
        for _ in 0..n.unsigned_abs() {
            d = self.seek_business_day(d, forward)?;
        }
        Ok(d)
    }

    pub fn add_business_days(&self, d: NaiveDate, n: i32) -> CalendarResult<NaiveDate> {
        self.shift_n_business_day(d, n)
    }

    pub fn next_business_day(&self, d: NaiveDate) -> CalendarResult<NaiveDate> {
        self.seek_business_day(d, true)
    }

    pub fn previous_business_day(&self, d: NaiveDate) -> CalendarResult<NaiveDate> {
        self.seek_business_day(d, false)
    }

    pub fn last_business_day_of_month(&self, year: i32, month: u32) -> CalendarResult<NaiveDate> {
        let eom = end_of_month(year, month).ok_or(CalendarError::InvalidMonth(month))?;
        if self.is_business_day(eom) {
            Ok(eom)
        } else {
            self.previous_business_day(eom)
        }
    }

    pub fn first_business_day_of_month(&self, year: i32, month: u32) -> CalendarResult<NaiveDate> {
        let fom = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidMonth(month))?;
        if self.is_business_day(fom) {
            Ok(fom)
        } else {
            self.next_business_day(fom)
        }
    }
}

impl BusinessDayCalendar<RuleCalendar<RwLockHolidayCache>> {
    /// Saturday/Sunday weekend with US federal holidays from the shared cache.
    pub fn us_federal() -> Self {
        Self::new(RuleCalendar::us_federal())
    }
}
