use std::sync::Arc;

use chrono::{
    Datelike,
    NaiveDate
};

use super::holidaycache::{
    HolidayCache,
    HolidayCacheKey,
    RwLockHolidayCache
};
use super::holidaycalculator::{
    default_calculator,
    HolidayCalculator
};
use super::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarResult;

/// Widest run of nominal years one `holidays_between` call stores in the
/// cache. Wider ranges are evaluated year by year and not kept.
pub const MAX_CACHED_YEAR_SPAN: i64 = 400;

/// Holiday calendar backed by a [`HolidayCalculator`] and its per-year cache.
///
/// An observed date may sit in the calendar year next to its nominal year
/// (Dec 31 for a Saturday New Year's Day), so lookups also consult the
/// neighbouring years' sets.
pub struct RuleCalendar<C: HolidayCache> {
    calculator: Arc<HolidayCalculator<C>>,
    subset: Option<Vec<String>>
}

impl<C: HolidayCache> RuleCalendar<C> {
    pub fn new(calculator: Arc<HolidayCalculator<C>>) -> Self {
        Self { calculator, subset: None }
    }

    /// Calendar restricted to the named rules of the calculator's rule set.
    pub fn with_subset(calculator: Arc<HolidayCalculator<C>>, names: &[&str]) -> CalendarResult<Self> {
        let subset = calculator.rules().canonical_subset(names)?;
        Ok(Self { calculator, subset: Some(subset) })
    }

    pub fn calculator(&self) -> &Arc<HolidayCalculator<C>> {
        &self.calculator
    }

    fn key(&self, year: i32) -> HolidayCacheKey {
        match &self.subset {
            None => HolidayCacheKey::all(year),
            Some(names) => HolidayCacheKey::subset(year, names.clone())
        }
    }

    fn nominal_years(first: i32, last: i32) -> std::ops::RangeInclusive<i32> {
        first.saturating_sub(1)..=last.saturating_add(1)
    }
}

impl RuleCalendar<RwLockHolidayCache> {
    /// US federal calendar sharing the process-wide cache.
    pub fn us_federal() -> Self {
        Self::new(default_calculator())
    }
}

impl<C: HolidayCache> HolidayCalendar for RuleCalendar<C> {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        Self::nominal_years(d.year(), d.year())
            .any(|year| self.calculator.get_or_compute(&self.key(year)).contains(d))
    }

    fn holidays_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        if start > end {
            return Vec::new();
        }
        let years = Self::nominal_years(start.year(), end.year());
        let span = *years.end() as i64 - *years.start() as i64 + 1;
        let cached = span <= MAX_CACHED_YEAR_SPAN;
        if !cached {
            log::debug!("{} years between {} and {}, bypassing holiday cache", span, start, end);
        }

        let in_range = |d: &NaiveDate| *d >= start && *d <= end;
        let mut dates: Vec<NaiveDate> = years
            .flat_map(|year| {
                let key = self.key(year);
                if cached {
                    self.calculator.get_or_compute(&key).dates().filter(|d| in_range(d)).collect::<Vec<_>>()
                } else {
                    self.calculator.compute_uncached(&key).dates().filter(|d| in_range(d)).collect::<Vec<_>>()
                }
            })
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }
}
