use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by holiday lookups and business-day arithmetic.
///
/// Every variant carries the offending value so the caller can act on it
/// without any further state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate
    },

    #[error("unknown holiday '{0}'")]
    UnknownHoliday(String),

    #[error("no business day found within {limit} days of {from}")]
    SearchLimitExceeded {
        from: NaiveDate,
        limit: u32
    },

    #[error("date out of representable range when stepping from {0}")]
    DateOutOfRange(NaiveDate),

    #[error("invalid month {0}")]
    InvalidMonth(u32)
}

pub type CalendarResult<T> = Result<T, CalendarError>;
