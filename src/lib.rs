pub mod businessdays;

pub mod configuration;

pub mod time {
    pub mod calendarerror;
    pub mod utility;
    pub mod rangeofdates;
    pub mod businessdayadjuster;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod holidayrule;
        pub mod holidayruleset;
    }

    pub mod calendar {
        pub mod holidayset;
        pub mod holidaycache;
        pub mod holidaycalculator;
        pub mod holidaycalendar;
        pub mod holidaylist;
        pub mod rulecalendar;
        pub mod weekendmask;
        pub mod businessdaycalendar;
    }
}

pub use businessdays::{
    add_business_days,
    is_business_day,
    is_weekend,
    holidays_for_year,
    next_business_day,
    previous_business_day,
    workdays_between
};
pub use time::calendar::holidaycalculator::holiday_dates;
pub use time::calendarerror::{
    CalendarError,
    CalendarResult
};
pub use time::recurringholiday::holidayrule::NamedHoliday;
