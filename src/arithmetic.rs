//! Day-count arithmetic over [`Datum`] values.
//!
//! All operations walk month-by-month instead of converting through a
//! linear day number, so the month-length table stays the single source
//! of truth for calendar length. Walks are bounded by the number of
//! months spanned.

use crate::consts::{DECEMBER, JANUARY, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::types::{Day, Month, Year, days_in_month};
use crate::{DateError, Datum};

// --- month stepping helpers ---

fn next_month(year: Year, month: Month) -> Option<(Year, Month)> {
    if month.get() == DECEMBER {
        if year.get() >= MAX_YEAR {
            None
        } else {
            Some((Year::new(year.get() + 1).ok()?, Month::new(JANUARY).ok()?))
        }
    } else {
        Some((year, Month::new(month.get() + 1).ok()?))
    }
}

fn prev_month(year: Year, month: Month) -> Option<(Year, Month)> {
    if month.get() == JANUARY {
        if year.get() == MIN_YEAR {
            None
        } else {
            Some((Year::new(year.get() - 1).ok()?, Month::new(DECEMBER).ok()?))
        }
    } else {
        Some((year, Month::new(month.get() - 1).ok()?))
    }
}

impl Datum {
    /// Number of days from this date to the first day of the next month:
    /// `days_in_month - day + 1`. The per-iteration stride of the
    /// forward walks.
    pub fn days_until_next_month(self) -> u8 {
        days_in_month(self.year, self.month) - self.day.get() + 1
    }

    fn first_of_next_month(self) -> Option<Self> {
        let (year, month) = next_month(self.year, self.month)?;
        let day = Day::new(MIN_DAY, year, month).ok()?;
        Some(Self { year, month, day })
    }

    fn last_of_prev_month(self) -> Option<Self> {
        let (year, month) = prev_month(self.year, self.month)?;
        let day = Day::new(days_in_month(year, month), year, month).ok()?;
        Some(Self { year, month, day })
    }

    /// Returns the date `n` days after this one.
    ///
    /// Walks forward one month at a time, rolling the year on
    /// December→January; `add_days(0)` returns an equal date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would land past
    /// year 9999.
    pub fn add_days(self, n: u32) -> Result<Self, DateError> {
        let mut current = self;
        let mut remaining = n;
        loop {
            let stride = u32::from(current.days_until_next_month());
            if remaining < stride {
                // remaining < stride, so the result stays in this month
                let day = Day::new(
                    current.day.get() + remaining as u8,
                    current.year,
                    current.month,
                )?;
                return Ok(Self { day, ..current });
            }
            remaining -= stride;
            current = current.first_of_next_month().ok_or(DateError::OutOfRange)?;
        }
    }

    /// Returns the date `n` days before this one.
    ///
    /// Walks backward one month at a time, rolling the year on
    /// January→December; `sub_days(0)` returns an equal date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result would land before
    /// year 0.
    pub fn sub_days(self, n: u32) -> Result<Self, DateError> {
        let mut current = self;
        let mut remaining = n;
        while remaining >= u32::from(current.day.get()) {
            remaining -= u32::from(current.day.get());
            current = current.last_of_prev_month().ok_or(DateError::OutOfRange)?;
        }
        // remaining < current.day, so the result stays in this month
        let day = Day::new(
            current.day.get() - remaining as u8,
            current.year,
            current.month,
        )?;
        Ok(Self { day, ..current })
    }

    /// Unsigned number of calendar days between this date and `other`.
    ///
    /// Symmetric: `a.delta_days(b) == b.delta_days(a)`. Walks the
    /// earlier date forward until it reaches the later date's month,
    /// then bridges the day difference.
    ///
    /// # Panics
    /// Panics if the walk passes its target month; that is an internal
    /// consistency failure, not an input error.
    pub fn delta_days(self, other: Self) -> u32 {
        if self == other {
            return 0;
        }
        let (mut current, until) = if self.is_before(other) {
            (self, other)
        } else {
            (other, self)
        };

        let mut total = 0u32;
        while (current.year, current.month) != (until.year, until.month) {
            assert!(
                (current.year, current.month) < (until.year, until.month),
                "delta walk passed its target month: {current} vs {until}"
            );
            total += u32::from(current.days_until_next_month());
            current = match current.first_of_next_month() {
                Some(next) => next,
                None => unreachable!("delta walk cannot leave the year range below {until}"),
            };
        }
        total + u32::from(current.day.get().abs_diff(until.day.get()))
    }
}
