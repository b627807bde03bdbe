use std::collections::{
    HashMap,
    HashSet
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use serde::Deserialize;
use thiserror::Error;

use crate::time::calendar::businessdaycalendar::BusinessDayCalendar;
use crate::time::calendar::holidaycache::RwLockHolidayCache;
use crate::time::calendar::holidaycalculator::{
    HolidayCalculator,
    MultiThreadedHolidayCalculator
};
use crate::time::calendar::rulecalendar::RuleCalendar;
use crate::time::calendar::weekendmask::WeekendMask;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidayrule::{
    HolidayKind,
    HolidayRule
};
use crate::time::recurringholiday::holidayruleset::HolidayRuleSet;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::weekendadjustment::{
    WeekendAdjustment,
    WeekendAdjustmentRule
};

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid holiday rule '{0}'")]
    InvalidRule(String),

    #[error("duplicate holiday rule '{0}'")]
    DuplicateRule(String)
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON props
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(tag = "holiday_type")]
enum HolidayKindJsonProp {
    FixedDate {
        month: u32,
        day: u32
    },
    NthWeekday {
        month: u32,
        weekday: Weekday,
        n: i8
    }
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    name: String,
    #[serde(default)]
    observed: bool,
    #[serde(default)]
    first_year: Option<i32>,
    #[serde(flatten)]
    kind: HolidayKindJsonProp
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    weekends: Option<WeekendMask>,
    #[serde(default)]
    observance: Option<HashMap<Weekday, WeekendAdjustment>>,
    holiday_rules: Vec<HolidayRuleJsonProp>
}

fn holiday_rule_from_json_prop(json_prop: HolidayRuleJsonProp) -> Result<HolidayRule, ConfigurationError> {
    let kind = match json_prop.kind {
        HolidayKindJsonProp::FixedDate { month, day } => {
            FixedDateHoliday::new(month, day).map(HolidayKind::FixedDate)
        },
        HolidayKindJsonProp::NthWeekday { month, weekday, n } => {
            NthWeekdayHoliday::new(month, n, weekday).map(HolidayKind::NthWeekday)
        }
    };
    let kind = kind.ok_or_else(|| ConfigurationError::InvalidRule(json_prop.name.clone()))?;

    let rule = HolidayRule::new(json_prop.name, kind, json_prop.observed);
    Ok(match json_prop.first_year {
        Some(first_year) => rule.since(first_year),
        None => rule
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Weekend definition and holiday rule table of one jurisdiction.
///
/// ```json
/// {
///   "weekends": ["Sat", "Sun"],
///   "observance": { "Sat": "PreviousWeekday", "Sun": "NextWeekday" },
///   "holiday_rules": [
///     { "name": "NEW_YEARS_DAY", "holiday_type": "FixedDate", "month": 1, "day": 1, "observed": true },
///     { "name": "MEMORIAL_DAY", "holiday_type": "NthWeekday", "month": 5, "weekday": "Mon", "n": -1 }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    weekends: WeekendMask,
    holiday_rules: HolidayRuleSet
}

impl Configuration {
    /// US federal rules with a Saturday/Sunday weekend.
    pub fn new() -> Configuration {
        Configuration {
            weekends: WeekendMask::default(),
            holiday_rules: HolidayRuleSet::us_federal()
        }
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Self::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Self::from_json_prop(json_prop)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Self::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut rules = Vec::with_capacity(json_prop.holiday_rules.len());
        for rule_prop in json_prop.holiday_rules {
            if !seen.insert(rule_prop.name.clone()) {
                return Err(ConfigurationError::DuplicateRule(rule_prop.name));
            }
            rules.push(holiday_rule_from_json_prop(rule_prop)?);
        }

        let observance = json_prop.observance
            .map(|map| WeekendAdjustmentRule::new(&map))
            .unwrap_or_default();

        log::debug!("loaded {} holiday rules", rules.len());
        Ok(Configuration {
            weekends: json_prop.weekends.unwrap_or_default(),
            holiday_rules: HolidayRuleSet::new(rules, observance)
        })
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn holiday_rules(&self) -> &HolidayRuleSet {
        &self.holiday_rules
    }

    /// Thread-safe calculator with a cache of its own.
    pub fn holiday_calculator(&self) -> MultiThreadedHolidayCalculator {
        HolidayCalculator::new_threadsafe(self.holiday_rules.clone())
    }

    pub fn business_day_calendar(&self) -> BusinessDayCalendar<RuleCalendar<RwLockHolidayCache>> {
        BusinessDayCalendar::with_weekends(
            self.weekends,
            RuleCalendar::new(Arc::new(self.holiday_calculator()))
        )
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Configuration::from_json_str(r#"{
            "holiday_rules": [
                { "name": "NEW_YEARS_DAY", "holiday_type": "FixedDate", "month": 1, "day": 1, "observed": true }
            ]
        }"#).unwrap();
        assert_eq!(config.weekends(), WeekendMask::default());
        assert_eq!(config.holiday_rules().observance(), &WeekendAdjustmentRule::us_federal());

        let holidays = config.holiday_calculator().holidays_for_year(2022, None).unwrap();
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date(), date(2021, 12, 31));
    }

    #[test]
    fn nth_weekday_rule_and_custom_weekend() {
        let config = Configuration::from_json_value(serde_json::json!({
            "weekends": ["Fri", "Sat"],
            "observance": { "Fri": "PreviousWeekday", "Sat": "NextWeekday" },
            "holiday_rules": [
                { "name": "LAST_MONDAY_OF_MAY", "holiday_type": "NthWeekday", "month": 5, "weekday": "Mon", "n": -1 },
                { "name": "FOUNDING_DAY", "holiday_type": "FixedDate", "month": 6, "day": 7, "observed": true, "first_year": 2000 }
            ]
        })).unwrap();

        let calendar = config.business_day_calendar();
        assert!(calendar.is_weekend(date(2024, 6, 7)));
        assert!(calendar.is_holiday(date(2024, 5, 27)));
        // Jun 7 2024 is a Friday, observed on Thursday Jun 6
        assert!(calendar.is_holiday(date(2024, 6, 6)));
        assert!(!calendar.is_business_day(date(2024, 6, 6)));
        assert!(calendar.is_business_day(date(2024, 6, 9)));
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let err = Configuration::from_json_str(r#"{
            "holiday_rules": [
                { "name": "BAD", "holiday_type": "FixedDate", "month": 2, "day": 30 }
            ]
        }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidRule(name) if name == "BAD"));

        let err = Configuration::from_json_str(r#"{
            "holiday_rules": [
                { "name": "ZERO", "holiday_type": "NthWeekday", "month": 5, "weekday": "Mon", "n": 0 }
            ]
        }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidRule(_)));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Configuration::from_json_str(r#"{
            "holiday_rules": [
                { "name": "A", "holiday_type": "FixedDate", "month": 1, "day": 1 },
                { "name": "A", "holiday_type": "FixedDate", "month": 1, "day": 2 }
            ]
        }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateRule(name) if name == "A"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Configuration::from_json_str(r#"{ "holiday_rules": [ { "name": "A" } ] }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Configuration::from_reader("/nonexistent/dateutils/config.json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Io(_)));
    }
}
