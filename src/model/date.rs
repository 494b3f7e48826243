use chrono::NaiveDate;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The day-month-year format that transaction dates are entered and stored in, e.g. `05-03-2024`.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// An error that can occur when parsing a day-month-year date.
#[derive(Debug, Clone, PartialEq)]
pub enum DateError {
    /// The text is not `D-M-YYYY`: one or two digit day and month, four digit year.
    Shape,
    /// The text has the right shape but is not a calendar date, e.g. `31-02-2024`.
    Parse(chrono::ParseError),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Shape => write!(f, "date must be day-month-year, e.g. 05-03-2024"),
            DateError::Parse(e) => Display::fmt(e, f),
        }
    }
}

impl Error for DateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DateError::Shape => None,
            DateError::Parse(e) => Some(e),
        }
    }
}

/// Parses `s` strictly as a day-month-year calendar date.
///
/// The year must be exactly four digits and no whitespace or signs are allowed. Dates that do
/// not exist, like `31-02-2024`, are rejected along with any other format.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    if !has_date_shape(s) {
        return Err(DateError::Shape);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(DateError::Parse)
}

fn has_date_shape(s: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let parts: Vec<&str> = s.split('-').collect();
    match parts.as_slice() {
        [day, month, year] => digits(day, 1, 2) && digits(month, 1, 2) && digits(year, 4, 4),
        _ => false,
    }
}
