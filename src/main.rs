use std::env;
use std::error::Error;

use chrono::{Datelike, NaiveDate};

use dateutils::configuration::Configuration;
use dateutils::time::businessdayadjuster::BusinessDayConvention;

const DEFAULT_YEAR: i32 = 2024;

/// Usage: `dateutils [year] [config.json]`
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let year = match args.next() {
        Some(arg) => arg.parse::<i32>()?,
        None => DEFAULT_YEAR
    };
    let config = match args.next() {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new()
    };

    let calculator = config.holiday_calculator();
    for holiday in calculator.holidays_for_year(year, None)? {
        println!("{}, {}, {}", holiday.date(), holiday.date().weekday(), holiday.name());
    }

    let calendar = config.business_day_calendar();
    let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or("year out of range")?;
    let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or("year out of range")?;
    println!("business days in {}: {}", year, calendar.workdays_between(start, end)?);

    for month in 1..=12 {
        let eom = calendar.last_business_day_of_month(year, month)?;
        let mid = NaiveDate::from_ymd_opt(year, month, 15).ok_or("year out of range")?;
        println!("{}-{:02}: last business day {}, 15th adjusted {}",
                 year,
                 month,
                 eom,
                 BusinessDayConvention::ModifiedFollowing.adjust(mid, &calendar)?);
    }
    Ok(())
}
