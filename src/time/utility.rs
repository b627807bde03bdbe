use chrono::{
    Datelike,
    NaiveDate
};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

/// Number of days in `month` of `year`, or 0 when `month` is outside 1..=12.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month == 0 || month > 12 {
        return 0;
    }

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quarter / month / year boundaries
// ─────────────────────────────────────────────────────────────────────────────

/// Quarter (1..=4) that `d` belongs to.
#[inline]
pub fn date_to_quarter(d: NaiveDate) -> u32 {
    (d.month() - 1) / 3 + 1
}

pub fn date_to_start_of_quarter(d: NaiveDate) -> NaiveDate {
    let month = ((d.month() - 1) / 3) * 3 + 1;
    // day 1 of a month in 1..=12 always exists for a year `d` already holds
    NaiveDate::from_ymd_opt(d.year(), month, 1).unwrap_or(d)
}

pub fn start_of_quarter(year: i32, quarter: u32) -> Option<NaiveDate> {
    if !(1..=4).contains(&quarter) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)
}

pub fn end_of_quarter(year: i32, quarter: u32) -> Option<NaiveDate> {
    if !(1..=4).contains(&quarter) {
        return None;
    }
    end_of_month(year, quarter * 3)
}

pub fn start_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn end_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))
}

pub fn start_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
}

pub fn end_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(2023, 12), 31);
        assert_eq!(days_of_month(2023, 13), 0);
    }

    #[test]
    fn quarters() {
        assert_eq!(date_to_quarter(date(2018, 1, 6)), 1);
        assert_eq!(date_to_quarter(date(2018, 3, 31)), 1);
        assert_eq!(date_to_quarter(date(2018, 4, 1)), 2);
        assert_eq!(date_to_quarter(date(2018, 9, 3)), 3);
        assert_eq!(date_to_quarter(date(2018, 12, 31)), 4);

        assert_eq!(date_to_start_of_quarter(date(2018, 6, 30)), date(2018, 4, 1));
        assert_eq!(date_to_start_of_quarter(date(2018, 10, 1)), date(2018, 10, 1));

        assert_eq!(start_of_quarter(2018, 3), Some(date(2018, 7, 1)));
        assert_eq!(end_of_quarter(2018, 1), Some(date(2018, 3, 31)));
        assert_eq!(end_of_quarter(2018, 4), Some(date(2018, 12, 31)));
        assert_eq!(start_of_quarter(2018, 5), None);
    }

    #[test]
    fn month_and_year_boundaries() {
        assert_eq!(start_of_month(2024, 2), Some(date(2024, 2, 1)));
        assert_eq!(end_of_month(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(end_of_month(2024, 0), None);
        assert_eq!(start_of_year(2018), Some(date(2018, 1, 1)));
        assert_eq!(end_of_year(2018), Some(date(2018, 12, 31)));
    }
}
