use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarResult;

// ─────────────────────────────────────────────────────────────────────────────
// Adjusters, only called for dates that are not business days
// ─────────────────────────────────────────────────────────────────────────────

fn unadjust<H: HolidayCalendar>(d: NaiveDate, _calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    Ok(d)
}

fn following<H: HolidayCalendar>(d: NaiveDate, calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    calendar.next_business_day(d)
}

fn preceding<H: HolidayCalendar>(d: NaiveDate, calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    calendar.previous_business_day(d)
}

fn modified_following<H: HolidayCalendar>(d: NaiveDate, calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    let adjusted = calendar.next_business_day(d)?;
    if adjusted.month() != d.month() {
        calendar.previous_business_day(d)
    } else {
        Ok(adjusted)
    }
}

fn modified_preceding<H: HolidayCalendar>(d: NaiveDate, calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    let adjusted = calendar.previous_business_day(d)?;
    if adjusted.month() != d.month() {
        calendar.next_business_day(d)
    } else {
        Ok(adjusted)
    }
}

fn nearest<H: HolidayCalendar>(d: NaiveDate, calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
    let previous_day = calendar.previous_business_day(d)?;
    let next_day = calendar.next_business_day(d)?;
    if (next_day - d).num_days() <= (d - previous_day).num_days() {
        Ok(next_day)
    } else {
        Ok(previous_day)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    Following,
    Preceding,
    ModifiedFollowing,
    ModifiedPreceding,
    Nearest
}

impl BusinessDayConvention {
    /// Moves `d` onto a business day per the convention; business days are
    /// returned unchanged.
    pub fn adjust<H: HolidayCalendar>(&self,
                                      d: NaiveDate,
                                      calendar: &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> {
        if calendar.is_business_day(d) {
            return Ok(d);
        }
        let adjuster: fn(NaiveDate, &BusinessDayCalendar<H>) -> CalendarResult<NaiveDate> = match self {
            BusinessDayConvention::Unadjusted => unadjust,
            BusinessDayConvention::Following => following,
            BusinessDayConvention::Preceding => preceding,
            BusinessDayConvention::ModifiedFollowing => modified_following,
            BusinessDayConvention::ModifiedPreceding => modified_preceding,
            BusinessDayConvention::Nearest => nearest
        };
        adjuster(d, calendar)
    }
}
