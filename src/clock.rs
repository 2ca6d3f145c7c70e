//! Conversions between [`Datum`] and the host platform's date values.
//!
//! The host supplies the current local date through chrono; this crate
//! does not manage timezones itself, it trusts whatever local date the
//! host reports.

use chrono::{Datelike, Local, NaiveDate};

use crate::{DateError, Datum};

/// Error type for conversions from host date values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The host date's year does not fit the supported range.
    #[error("Unsupported host year: {0} (must be 0-9999)")]
    UnsupportedYear(i32),

    /// The converted components failed date validation.
    #[error(transparent)]
    Invalid(#[from] DateError),
}

impl Datum {
    /// The current date in the host's local timezone, time-of-day
    /// truncated.
    ///
    /// # Errors
    /// Returns `ConvertError` if the host clock reports a date outside
    /// years 0-9999.
    pub fn today() -> Result<Self, ConvertError> {
        Self::try_from(Local::now().date_naive())
    }
}

impl TryFrom<NaiveDate> for Datum {
    type Error = ConvertError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ConvertError::UnsupportedYear(date.year()))?;
        // chrono's month0 is 0-indexed; this crate's months are 1-indexed
        let month = date.month0() + 1;
        Ok(Self::new(year, month as u8, date.day() as u8)?)
    }
}

impl From<Datum> for NaiveDate {
    fn from(date: Datum) -> Self {
        match Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        ) {
            Some(converted) => converted,
            None => unreachable!("every Datum is a valid calendar date"),
        }
    }
}
