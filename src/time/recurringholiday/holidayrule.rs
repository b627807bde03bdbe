use std::borrow::Cow;

use chrono::{
    Datelike,
    NaiveDate
};
use serde::Serialize;

use super::fixeddateholiday::FixedDateHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HolidayKind {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday)
}

impl RecurringHoliday for HolidayKind {
    fn get_holiday(&self, year: i32) -> Option<NaiveDate> {
        match self {
            HolidayKind::FixedDate(holiday) => holiday.get_holiday(year),
            HolidayKind::NthWeekday(holiday) => holiday.get_holiday(year)
        }
    }
}

/// One named entry of a holiday rule table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayRule {
    name: Cow<'static, str>,
    kind: HolidayKind,
    observed: bool,
    first_year: Option<i32>
}

impl HolidayRule {
    pub fn new(name: impl Into<String>, kind: HolidayKind, observed: bool) -> HolidayRule {
        HolidayRule {
            name: Cow::Owned(name.into()),
            kind,
            observed,
            first_year: None
        }
    }

    pub(crate) const fn from_table(name: &'static str,
                                   kind: HolidayKind,
                                   observed: bool,
                                   first_year: Option<i32>) -> HolidayRule {
        HolidayRule {
            name: Cow::Borrowed(name),
            kind,
            observed,
            first_year
        }
    }

    /// Restricts the rule to `first_year` and later.
    pub fn since(mut self, first_year: i32) -> HolidayRule {
        self.first_year = Some(first_year);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &HolidayKind {
        &self.kind
    }

    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn first_year(&self) -> Option<i32> {
        self.first_year
    }

    /// Date the holiday is recognized in nominal `year`, after observance.
    ///
    /// The observed date may fall in a neighbouring calendar year (New Year's
    /// Day on a Saturday is observed on Dec 31 of the previous year); it is
    /// still attributed to `year`.
    pub fn observed_date(&self, year: i32, observance: &WeekendAdjustmentRule) -> Option<NaiveDate> {
        if self.first_year.is_some_and(|first| year < first) {
            return None;
        }
        let raw = self.kind.get_holiday(year)?;
        if self.observed {
            observance.adjust(raw)
        } else {
            Some(raw)
        }
    }
}

/// A holiday resolved to a concrete date.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NamedHoliday {
    // field order gives date-then-name ordering
    date: NaiveDate,
    name: String
}

impl NamedHoliday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> NamedHoliday {
        NamedHoliday { date, name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Nominal year the holiday belongs to differs from its calendar year.
    pub fn crosses_year(&self, nominal_year: i32) -> bool {
        self.date.year() != nominal_year
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_years_day() -> HolidayRule {
        HolidayRule::new(
            "NEW_YEARS_DAY",
            HolidayKind::FixedDate(FixedDateHoliday::new(1, 1).unwrap()),
            true
        )
    }

    #[test]
    fn observed_shift_crosses_into_previous_year() {
        let federal = WeekendAdjustmentRule::us_federal();
        // 2022-01-01 is a Saturday
        assert_eq!(new_years_day().observed_date(2022, &federal), Some(date(2021, 12, 31)));
        // 2023-01-01 is a Sunday
        assert_eq!(new_years_day().observed_date(2023, &federal), Some(date(2023, 1, 2)));
    }

    #[test]
    fn unobserved_rule_keeps_weekend_date() {
        let rule = HolidayRule::new(
            "NEW_YEARS_DAY",
            HolidayKind::FixedDate(FixedDateHoliday::new(1, 1).unwrap()),
            false
        );
        let federal = WeekendAdjustmentRule::us_federal();
        assert_eq!(rule.observed_date(2022, &federal), Some(date(2022, 1, 1)));
    }

    #[test]
    fn first_year_excludes_earlier_years() {
        let rule = HolidayRule::new(
            "JUNETEENTH",
            HolidayKind::FixedDate(FixedDateHoliday::new(6, 19).unwrap()),
            true
        ).since(2021);
        let federal = WeekendAdjustmentRule::us_federal();
        assert_eq!(rule.observed_date(2020, &federal), None);
        // 2021-06-19 is a Saturday
        assert_eq!(rule.observed_date(2021, &federal), Some(date(2021, 6, 18)));
    }

    #[test]
    fn nth_weekday_kind_dispatches() {
        let kind = HolidayKind::NthWeekday(NthWeekdayHoliday::new(9, 1, Weekday::Mon).unwrap());
        assert_eq!(kind.get_holiday(2024), Some(date(2024, 9, 2)));
    }

    #[test]
    fn named_holidays_order_by_date_first() {
        let a = NamedHoliday::new("Z", date(2024, 1, 1));
        let b = NamedHoliday::new("A", date(2024, 1, 2));
        assert!(a < b);
        assert!(NamedHoliday::new("X", date(2021, 12, 31)).crosses_year(2022));
    }

    #[test]
    fn named_holiday_serializes_as_date_and_name() {
        let holiday = NamedHoliday::new("INDEPENDENCE_DAY", date(2024, 7, 4));
        assert_eq!(
            serde_json::to_value(&holiday).unwrap(),
            serde_json::json!({ "date": "2024-07-04", "name": "INDEPENDENCE_DAY" })
        );
    }
}
