use std::collections::HashMap;

use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted = 0,
    NextWeekday = 1,
    PreviousWeekday = -1
}

/// Observance rule: the day shift applied to a holiday falling on each weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    // indexed by num_days_from_monday, None means the date stays put
    rule: [Option<i64>; 7]
}

impl WeekendAdjustmentRule {
    /// Creates a new WeekendAdjustmentRule from a HashMap.
    ///
    /// Every weekday present in the map counts as a weekend day, so the shift
    /// keeps walking in the adjustment direction until it leaves the weekend.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>) -> WeekendAdjustmentRule {
        let mut rule: [Option<i64>; 7] = [None; 7];

        for (&weekday, &adj) in adjustment_map {
            if adj == WeekendAdjustment::Unadjusted {
                continue;
            }

            let mut to_weekday = weekday;
            let next_weekday = if adj == WeekendAdjustment::NextWeekday {
                Weekday::succ
            } else {
                Weekday::pred
            };

            let mut shift_days: i64 = 0;
            let one_day = adj as i64;

            // A map covering the whole week has no weekday to land on.
            while adjustment_map.contains_key(&to_weekday) && shift_days.abs() < 7 {
                to_weekday = next_weekday(&to_weekday);
                shift_days += one_day;
            }

            if shift_days.abs() < 7 {
                let idx = weekday.num_days_from_monday() as usize;
                rule[idx] = Some(shift_days);
            }
        }

        WeekendAdjustmentRule { rule }
    }

    /// US federal observance: Saturday to the preceding Friday, Sunday to the
    /// following Monday.
    pub fn us_federal() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule::new(&HashMap::from([
            (Weekday::Sat, WeekendAdjustment::PreviousWeekday),
            (Weekday::Sun, WeekendAdjustment::NextWeekday)
        ]))
    }

    /// Rule that never moves a date.
    pub fn unadjusted() -> WeekendAdjustmentRule {
        WeekendAdjustmentRule { rule: [None; 7] }
    }

    /// Reconstructs the adjustment map from the internal rule array.
    pub fn adjustment_map(&self) -> HashMap<Weekday, WeekendAdjustment> {
        let mut result: HashMap<Weekday, WeekendAdjustment> = HashMap::new();

        for day_offset in 0..7u8 {
            let Some(shift) = self.rule[day_offset as usize] else {
                continue;
            };
            let Ok(weekday) = Weekday::try_from(day_offset) else {
                continue;
            };

            let adjustment = match shift {
                n if n > 0 => WeekendAdjustment::NextWeekday,
                n if n < 0 => WeekendAdjustment::PreviousWeekday,
                _ => WeekendAdjustment::Unadjusted,
            };

            result.insert(weekday, adjustment);
        }

        result
    }

    /// Signed day shift applied to a date falling on `weekday`.
    #[inline]
    pub fn shift_days(&self, weekday: Weekday) -> i64 {
        self.rule[weekday.num_days_from_monday() as usize].unwrap_or(0)
    }

    /// Adjusts a date according to the weekend adjustment rules.
    ///
    /// Returns `None` only when the shifted date leaves chrono's range.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Option<NaiveDate> {
        match self.shift_days(d.weekday()) {
            0 => Some(d),
            shift => d.checked_add_signed(TimeDelta::days(shift))
        }
    }
}

impl Default for WeekendAdjustmentRule {
    fn default() -> Self {
        WeekendAdjustmentRule::us_federal()
    }
}
