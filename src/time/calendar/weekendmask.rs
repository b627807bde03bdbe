use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

/// Weekend representation using a bitmask.
/// Each bit represents a day: Mon(0), Tue(1), ..., Sun(6)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &[Weekday]) -> Self {
        let mut mask = 0u8;
        for &weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    pub const fn saturday_sunday() -> Self {
        WeekendMask(0b0110_0000)
    }

    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn is_weekend_date(&self, d: NaiveDate) -> bool {
        self.is_weekend(d.weekday())
    }

    /// Number of weekend days per week.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns the weekend weekdays, Monday first.
    pub fn weekend_list(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}

impl From<Vec<Weekday>> for WeekendMask {
    fn from(weekends: Vec<Weekday>) -> Self {
        WeekendMask::new(&weekends)
    }
}

impl From<WeekendMask> for Vec<Weekday> {
    fn from(mask: WeekendMask) -> Self {
        mask.weekend_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_saturday_sunday() {
        let mask = WeekendMask::default();
        assert_eq!(mask, WeekendMask::new(&[Weekday::Sat, Weekday::Sun]));
        assert!(mask.is_weekend(Weekday::Sat));
        assert!(mask.is_weekend(Weekday::Sun));
        assert!(!mask.is_weekend(Weekday::Fri));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.weekend_list(), vec![Weekday::Sat, Weekday::Sun]);
    }

    #[test]
    fn serde_as_weekday_list() {
        let mask: WeekendMask = serde_json::from_str(r#"["Fri", "Sat"]"#).unwrap();
        assert!(mask.is_weekend(Weekday::Fri));
        assert!(!mask.is_weekend(Weekday::Sun));
        assert_eq!(serde_json::to_string(&mask).unwrap(), r#"["Fri","Sat"]"#);
    }
}
