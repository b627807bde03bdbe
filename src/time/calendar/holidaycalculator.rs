use std::sync::Arc;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::holidaycache::{
    HolidayCache,
    HolidayCacheKey,
    RefCellHolidayCache,
    RwLockHolidayCache
};
use super::holidayset::HolidaySet;
use crate::time::calendarerror::CalendarResult;
use crate::time::recurringholiday::holidayrule::NamedHoliday;
use crate::time::recurringholiday::holidayruleset::HolidayRuleSet;

/// Evaluates a [`HolidayRuleSet`] into per-year [`HolidaySet`]s, memoized
/// through the cache backend `C`.
pub struct HolidayCalculator<C: HolidayCache> {
    rules: HolidayRuleSet,
    cache: C,
}

impl<C: HolidayCache> HolidayCalculator<C> {
    pub fn with_cache(rules: HolidayRuleSet, cache: C) -> Self {
        Self { rules, cache }
    }

    pub fn rules(&self) -> &HolidayRuleSet {
        &self.rules
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Cached holiday set of `year`; `subset` restricts it to the named rules.
    ///
    /// Observed dates are attributed to the nominal `year` even when the
    /// weekend shift moves them into the neighbouring calendar year.
    pub fn holiday_set(&self, year: i32, subset: Option<&[&str]>) -> CalendarResult<Arc<HolidaySet>> {
        let key = match subset {
            None => HolidayCacheKey::all(year),
            Some(names) => HolidayCacheKey::subset(year, self.rules.canonical_subset(names)?)
        };
        Ok(self.get_or_compute(&key))
    }

    /// Holidays of `year` as `(name, date)` pairs in date order.
    ///
    /// The returned `Vec` is a fresh copy on every call.
    pub fn holidays_for_year(&self, year: i32, subset: Option<&[&str]>) -> CalendarResult<Vec<NamedHoliday>> {
        Ok(self.holiday_set(year, subset)?.to_vec())
    }

    /// Holidays of every rule for `year` (never fails).
    pub fn all_holidays(&self, year: i32) -> Arc<HolidaySet> {
        self.get_or_compute(&HolidayCacheKey::all(year))
    }

    pub(crate) fn get_or_compute(&self, key: &HolidayCacheKey) -> Arc<HolidaySet> {
        self.cache.get_or_compute(key, || self.compute(key))
    }

    /// Evaluates `key` without reading or filling the cache.
    pub(crate) fn compute_uncached(&self, key: &HolidayCacheKey) -> HolidaySet {
        self.compute(key)
    }

    fn compute(&self, key: &HolidayCacheKey) -> HolidaySet {
        log::debug!("computing holidays for {} (subset {:?})", key.year(), key.names());

        let subset = key.names();
        let observance = self.rules.observance();
        let holidays: Vec<NamedHoliday> = self.rules
            .rules()
            .iter()
            .filter(|rule| subset.is_none_or(|names| names.iter().any(|n| n == rule.name())))
            .filter_map(|rule| {
                rule.observed_date(key.year(), observance)
                    .map(|d| NamedHoliday::new(rule.name(), d))
            })
            .collect();

        HolidaySet::new(key.year(), holidays)
    }
}

impl HolidayCalculator<RefCellHolidayCache> {
    pub fn new(rules: HolidayRuleSet) -> Self {
        Self::with_cache(rules, RefCellHolidayCache::new())
    }
}

impl HolidayCalculator<RwLockHolidayCache> {
    pub fn new_threadsafe(rules: HolidayRuleSet) -> Self {
        Self::with_cache(rules, RwLockHolidayCache::new())
    }
}

pub type SingleThreadedHolidayCalculator = HolidayCalculator<RefCellHolidayCache>;
pub type MultiThreadedHolidayCalculator  = HolidayCalculator<RwLockHolidayCache>;

static DEFAULT_CALCULATOR: Lazy<Arc<MultiThreadedHolidayCalculator>> =
    Lazy::new(|| Arc::new(HolidayCalculator::new_threadsafe(HolidayRuleSet::us_federal())));

/// Process-wide US federal calculator; its cache lives until process exit.
///
/// Entries are one per requested year and never evicted. Range lookups wider
/// than `rulecalendar::MAX_CACHED_YEAR_SPAN` bypass the cache.
pub fn default_calculator() -> Arc<MultiThreadedHolidayCalculator> {
    Arc::clone(&DEFAULT_CALCULATOR)
}

/// Dates of `holidays`, e.g. to pass the output of `holidays_for_year` back
/// in as an explicit holiday collection.
pub fn holiday_dates(holidays: &[NamedHoliday]) -> Vec<NaiveDate> {
    holidays.iter().map(|h| h.date()).collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::time::calendarerror::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Counts computations, delegating storage to a RefCell cache.
    #[derive(Default)]
    struct CountingCache {
        inner: RefCellHolidayCache,
        computed: Cell<usize>,
    }

    impl HolidayCache for CountingCache {
        fn get_or_compute(
            &self,
            key: &HolidayCacheKey,
            compute: impl FnOnce() -> HolidaySet,
        ) -> Arc<HolidaySet> {
            self.inner.get_or_compute(key, || {
                self.computed.set(self.computed.get() + 1);
                compute()
            })
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    fn counting_calculator() -> HolidayCalculator<CountingCache> {
        HolidayCalculator::with_cache(HolidayRuleSet::us_federal(), CountingCache::default())
    }

    #[test]
    fn federal_holidays_2024() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        let holidays = calculator.holidays_for_year(2024, None).unwrap();
        let expected = vec![
            NamedHoliday::new("NEW_YEARS_DAY", date(2024, 1, 1)),
            NamedHoliday::new("MARTIN_LUTHER_KING_JR_DAY", date(2024, 1, 15)),
            NamedHoliday::new("WASHINGTONS_BIRTHDAY", date(2024, 2, 19)),
            NamedHoliday::new("MEMORIAL_DAY", date(2024, 5, 27)),
            NamedHoliday::new("JUNETEENTH", date(2024, 6, 19)),
            NamedHoliday::new("INDEPENDENCE_DAY", date(2024, 7, 4)),
            NamedHoliday::new("LABOR_DAY", date(2024, 9, 2)),
            NamedHoliday::new("COLUMBUS_DAY", date(2024, 10, 14)),
            NamedHoliday::new("VETERANS_DAY", date(2024, 11, 11)),
            NamedHoliday::new("THANKSGIVING_DAY", date(2024, 11, 28)),
            NamedHoliday::new("CHRISTMAS_DAY", date(2024, 12, 25)),
        ];
        assert_eq!(holidays, expected);
    }

    #[test]
    fn observed_shifts_in_2021() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        let set = calculator.all_holidays(2021);
        // Jun 19 and Jul 4 2021 fall on Saturday and Sunday
        assert_eq!(set.get("JUNETEENTH"), Some(date(2021, 6, 18)));
        assert_eq!(set.get("INDEPENDENCE_DAY"), Some(date(2021, 7, 5)));
        // Dec 25 2021 is a Saturday
        assert_eq!(set.get("CHRISTMAS_DAY"), Some(date(2021, 12, 24)));
        // New Year's Day 2021 is a Friday, no shift
        assert_eq!(set.get("NEW_YEARS_DAY"), Some(date(2021, 1, 1)));
        assert!(!set.contains(date(2021, 12, 31)));
    }

    #[test]
    fn new_years_day_shift_is_keyed_by_nominal_year() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        let set = calculator.all_holidays(2022);
        assert_eq!(set.get("NEW_YEARS_DAY"), Some(date(2021, 12, 31)));
        assert_eq!(set.holidays().first().map(|h| h.date()), Some(date(2021, 12, 31)));
    }

    #[test]
    fn rules_before_first_year_are_absent() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        let set = calculator.all_holidays(2019);
        assert_eq!(set.get("JUNETEENTH"), None);
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn subset_request() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        let holidays = calculator
            .holidays_for_year(2024, Some(&["INDEPENDENCE_DAY", "NEW_YEARS_DAY"][..]))
            .unwrap();
        assert_eq!(holidays, vec![
            NamedHoliday::new("NEW_YEARS_DAY", date(2024, 1, 1)),
            NamedHoliday::new("INDEPENDENCE_DAY", date(2024, 7, 4)),
        ]);
    }

    #[test]
    fn unknown_subset_name_fails() {
        let calculator = SingleThreadedHolidayCalculator::new(HolidayRuleSet::us_federal());
        assert_eq!(
            calculator.holidays_for_year(2024, Some(&["EASTER_MONDAY"][..])),
            Err(CalendarError::UnknownHoliday("EASTER_MONDAY".to_owned()))
        );
        assert!(calculator.cache().is_empty());
    }

    #[test]
    fn repeated_requests_hit_the_cache() {
        let calculator = counting_calculator();
        calculator.holidays_for_year(2024, None).unwrap();
        calculator.holidays_for_year(2024, None).unwrap();
        calculator.holidays_for_year(2025, None).unwrap();
        assert_eq!(calculator.cache().computed.get(), 2);
    }

    #[test]
    fn subset_order_shares_one_cache_entry() {
        let calculator = counting_calculator();
        calculator.holidays_for_year(2024, Some(&["LABOR_DAY", "CHRISTMAS_DAY"][..])).unwrap();
        calculator.holidays_for_year(2024, Some(&["CHRISTMAS_DAY", "LABOR_DAY", "LABOR_DAY"][..])).unwrap();
        calculator.holidays_for_year(2024, None).unwrap();
        assert_eq!(calculator.cache().computed.get(), 2);
        assert_eq!(calculator.cache().len(), 2);
    }

    #[test]
    fn returned_holidays_are_independent_copies() {
        let calculator = counting_calculator();
        let mut first = calculator.holidays_for_year(2024, None).unwrap();
        first.clear();
        first.push(NamedHoliday::new("BOGUS", date(2024, 3, 3)));

        let second = calculator.holidays_for_year(2024, None).unwrap();
        assert_eq!(second.len(), 11);
        assert!(second.iter().all(|h| h.name() != "BOGUS"));
    }

    #[test]
    fn holiday_dates_strips_names() {
        let holidays = vec![
            NamedHoliday::new("A", date(2024, 1, 1)),
            NamedHoliday::new("B", date(2024, 7, 4)),
        ];
        assert_eq!(holiday_dates(&holidays), vec![date(2024, 1, 1), date(2024, 7, 4)]);
    }
}
