use std::collections::BTreeSet;

use chrono::Weekday;

use super::fixeddateholiday::FixedDateHoliday;
use super::holidayrule::{
    HolidayKind,
    HolidayRule
};
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;
use crate::time::calendarerror::{
    CalendarError,
    CalendarResult
};

// ─────────────────────────────────────────────────────────────────────────────
// US federal holidays (5 U.S.C. 6103)
// ─────────────────────────────────────────────────────────────────────────────

const fn fixed(name: &'static str, month: u32, day: u32, first_year: Option<i32>) -> HolidayRule {
    HolidayRule::from_table(
        name,
        HolidayKind::FixedDate(FixedDateHoliday::from_table(month, day)),
        true,
        first_year
    )
}

const fn nth(name: &'static str, month: u32, n: i8, weekday: Weekday, first_year: Option<i32>) -> HolidayRule {
    HolidayRule::from_table(
        name,
        HolidayKind::NthWeekday(NthWeekdayHoliday::from_table(month, n, weekday)),
        false,
        first_year
    )
}

const US_FEDERAL_RULES: [HolidayRule; 11] = [
    fixed("NEW_YEARS_DAY",                1,  1,               None),
    nth("MARTIN_LUTHER_KING_JR_DAY",      1,  3, Weekday::Mon, Some(1986)),
    nth("WASHINGTONS_BIRTHDAY",           2,  3, Weekday::Mon, None),
    nth("MEMORIAL_DAY",                   5, -1, Weekday::Mon, None),
    fixed("JUNETEENTH",                   6, 19,               Some(2021)),
    fixed("INDEPENDENCE_DAY",             7,  4,               None),
    nth("LABOR_DAY",                      9,  1, Weekday::Mon, None),
    nth("COLUMBUS_DAY",                  10,  2, Weekday::Mon, None),
    fixed("VETERANS_DAY",                11, 11,               None),
    nth("THANKSGIVING_DAY",              11,  4, Weekday::Thu, None),
    fixed("CHRISTMAS_DAY",               12, 25,               None),
];

/// Ordered table of holiday rules plus the observance rule shared by the
/// rules flagged `observed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HolidayRuleSet {
    rules: Vec<HolidayRule>,
    observance: WeekendAdjustmentRule
}

impl HolidayRuleSet {
    pub fn new(rules: Vec<HolidayRule>, observance: WeekendAdjustmentRule) -> HolidayRuleSet {
        HolidayRuleSet { rules, observance }
    }

    pub fn us_federal() -> HolidayRuleSet {
        HolidayRuleSet::new(US_FEDERAL_RULES.to_vec(), WeekendAdjustmentRule::us_federal())
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn observance(&self) -> &WeekendAdjustmentRule {
        &self.observance
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name())
    }

    pub fn get(&self, name: &str) -> Option<&HolidayRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Canonical form of a requested subset: sorted, deduplicated, and
    /// checked against the table.
    pub fn canonical_subset(&self, names: &[&str]) -> CalendarResult<Vec<String>> {
        let mut canonical = BTreeSet::new();
        for &name in names {
            if self.get(name).is_none() {
                return Err(CalendarError::UnknownHoliday(name.to_owned()));
            }
            canonical.insert(name.to_owned());
        }
        Ok(canonical.into_iter().collect())
    }

    /// Rules in table order; `None` selects every rule.
    pub fn select(&self, subset: Option<&[String]>) -> CalendarResult<Vec<&HolidayRule>> {
        match subset {
            None => Ok(self.rules.iter().collect()),
            Some(names) => names
                .iter()
                .map(|name| self.get(name).ok_or_else(|| CalendarError::UnknownHoliday(name.clone())))
                .collect()
        }
    }
}

impl Default for HolidayRuleSet {
    fn default() -> Self {
        HolidayRuleSet::us_federal()
    }
}
