mod arithmetic;
mod clock;
mod consts;
mod prelude;
mod types;
mod weekday;

pub use clock::ConvertError;
pub use consts::*;
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use weekday::Weekday;

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// An immutable calendar date: a (year, month, day) triple in the
/// proleptic Gregorian calendar over years 0-9999, with no time-of-day
/// or timezone component.
///
/// Every constructed `Datum` is calendar-valid — the day never exceeds
/// the actual length of its month — and instances are never mutated;
/// arithmetic returns new, revalidated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Datum {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 0-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Day arithmetic left the supported year range 0-{}", MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for DateError {}

impl Datum {
    /// Creates a date from raw components, validating each field and then
    /// the day against the actual length of that year/month.
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range or the day
    /// exceeds `days_in_month(year, month)`. Never returns a partially
    /// constructed value.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component (as u16 for convenience)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Strictly earlier than `other`: mutually exclusive with equality.
    pub fn is_before(self, other: Self) -> bool {
        self < other
    }

    /// Strictly later than `other`: mutually exclusive with equality.
    pub fn is_after(self, other: Self) -> bool {
        self > other
    }
}

impl FromStr for Datum {
    type Err = DateError;

    /// Parses exactly `YYYY-MM-DD`: length 10, zero-padded base-10
    /// digits, no surrounding whitespace. Calendar validity is enforced
    /// by the constructor, so `"2019-02-30"` fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DATE_STRING_LEN {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        // str::parse would accept a leading '+', which YYYY-MM-DD does not
        if !parts
            .iter()
            .all(|part| part.chars().all(|c| c.is_ascii_digit()))
        {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl Datum {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

/// Total-order comparator for ascending sorts.
pub fn compare_ascending(a: &Datum, b: &Datum) -> Ordering {
    a.cmp(b)
}

/// Total-order comparator for descending sorts: the negation of
/// [`compare_ascending`].
pub fn compare_descending(a: &Datum, b: &Datum) -> Ordering {
    b.cmp(a)
}

/// Earliest date in the sequence by linear scan, or `None` if empty.
pub fn earliest<I>(dates: I) -> Option<Datum>
where
    I: IntoIterator<Item = Datum>,
{
    let mut iter = dates.into_iter();
    let mut best = iter.next()?;
    for date in iter {
        if date.is_before(best) {
            best = date;
        }
    }
    Some(best)
}

/// Latest date in the sequence by linear scan, or `None` if empty.
pub fn latest<I>(dates: I) -> Option<Datum>
where
    I: IntoIterator<Item = Datum>,
{
    let mut iter = dates.into_iter();
    let mut best = iter.next()?;
    for date in iter {
        if date.is_after(best) {
            best = date;
        }
    }
    Some(best)
}

impl serde::Serialize for Datum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Datum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
