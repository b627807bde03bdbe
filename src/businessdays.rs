//! Business-day functions over the US federal holiday calendar and a
//! Saturday/Sunday weekend.
//!
//! Every function taking `holidays` uses the built-in federal rules when it
//! is `None`. When it is `Some`, the given dates are copied, sorted and
//! deduplicated and used *instead of* the federal rules.

use chrono::NaiveDate;

use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;
use crate::time::calendar::holidaycache::RwLockHolidayCache;
use crate::time::calendar::holidaycalculator::default_calculator;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaylist::HolidayList;
use crate::time::calendar::rulecalendar::RuleCalendar;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::calendarerror::CalendarResult;
use crate::time::recurringholiday::holidayrule::NamedHoliday;

enum Holidays {
    Federal(RuleCalendar<RwLockHolidayCache>),
    Explicit(HolidayList)
}

impl HolidayCalendar for Holidays {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        match self {
            Holidays::Federal(calendar) => calendar.is_holiday(d),
            Holidays::Explicit(list) => list.is_holiday(d)
        }
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        match self {
            Holidays::Federal(calendar) => calendar.holidays_between(start, end),
            Holidays::Explicit(list) => list.holidays_between(start, end)
        }
    }
}

fn calendar(holidays: Option<&[NaiveDate]>) -> BusinessDayCalendar<Holidays> {
    let holidays = match holidays {
        None => Holidays::Federal(RuleCalendar::us_federal()),
        Some(dates) => Holidays::Explicit(HolidayList::from(dates))
    };
    BusinessDayCalendar::new(holidays)
}

pub fn is_weekend(d: NaiveDate) -> bool {
    WeekendMask::default().is_weekend_date(d)
}

pub fn is_business_day(d: NaiveDate, holidays: Option<&[NaiveDate]>) -> bool {
    calendar(holidays).is_business_day(d)
}

/// Business days in `[start, end]`, both ends included.
///
/// Fails with `CalendarError::InvalidRange` when `start > end`.
pub fn workdays_between(start: NaiveDate,
                        end: NaiveDate,
                        holidays: Option<&[NaiveDate]>) -> CalendarResult<i64> {
    calendar(holidays).workdays_between(start, end)
}

/// Date `n` business days after `d` (before it when `n < 0`).
pub fn add_business_days(d: NaiveDate, n: i32, holidays: Option<&[NaiveDate]>) -> CalendarResult<NaiveDate> {
    calendar(holidays).add_business_days(d, n)
}

pub fn next_business_day(d: NaiveDate, holidays: Option<&[NaiveDate]>) -> CalendarResult<NaiveDate> {
    calendar(holidays).next_business_day(d)
}

pub fn previous_business_day(d: NaiveDate, holidays: Option<&[NaiveDate]>) -> CalendarResult<NaiveDate> {
    calendar(holidays).previous_business_day(d)
}

/// US federal holidays of `year`, optionally limited to the named rules.
///
/// Returns a fresh `Vec` on every call; see `HolidayCalculator::holiday_set`
/// for the year-boundary convention.
pub fn holidays_for_year(year: i32, subset: Option<&[&str]>) -> CalendarResult<Vec<NamedHoliday>> {
    default_calculator().holidays_for_year(year, subset)
}
