use std::fmt;

use crate::Datum;
use crate::consts::{DAYS_IN_WEEK, WEEKDAY_ANCHOR};

/// The seven ISO weekdays, Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in ordinal order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Fixed ordinal: Monday = 0 through Sunday = 6.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Weekday for an ordinal in `0..=6`, `None` otherwise.
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Three-letter lowercase label, `mon` through `sun`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monday => "mon",
            Self::Tuesday => "tue",
            Self::Wednesday => "wed",
            Self::Thursday => "thu",
            Self::Friday => "fri",
            Self::Saturday => "sat",
            Self::Sunday => "sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn anchor_monday() -> Datum {
    let (year, month, day) = WEEKDAY_ANCHOR;
    match Datum::new(year, month, day) {
        Ok(anchor) => anchor,
        Err(_) => unreachable!("weekday anchor is a valid date"),
    }
}

impl Datum {
    /// The weekday this date falls on.
    ///
    /// Derived from the day distance to a known Monday. `delta_days` is
    /// unsigned, so dates before the anchor map through the
    /// complementary offset: remainder 0 stays Monday, remainder 6 is
    /// Tuesday, 5 is Wednesday, and so on.
    pub fn weekday(self) -> Weekday {
        let anchor = anchor_monday();
        let remainder = self.delta_days(anchor) % DAYS_IN_WEEK;
        let ordinal = if self.is_before(anchor) {
            (DAYS_IN_WEEK - remainder) % DAYS_IN_WEEK
        } else {
            remainder
        };
        match Weekday::from_ordinal(ordinal as u8) {
            Some(weekday) => weekday,
            None => unreachable!("weekday remainder {ordinal} outside 0-6"),
        }
    }

    /// Three-letter lowercase label of the weekday, `mon` through `sun`.
    pub fn weekday_label(self) -> &'static str {
        self.weekday().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::datum;

    #[test]
    fn test_anchor_is_monday() {
        assert_eq!(datum(2019, 8, 26).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_week_before_anchor_is_monday() {
        assert_eq!(datum(2019, 8, 19).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_known_sunday_before_anchor() {
        assert_eq!(datum(1988, 9, 11).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_week_after_anchor() {
        // 2019-08-26 through 2019-09-01 run Monday through Sunday
        let monday = datum(2019, 8, 26);
        for (offset, expected) in Weekday::ALL.iter().enumerate() {
            let date = monday.add_days(offset as u32).unwrap();
            assert_eq!(date.weekday(), *expected, "offset {offset}");
        }
    }

    #[test]
    fn test_week_entirely_before_anchor() {
        // 2019-08-19 through 2019-08-25 run Monday through Sunday
        let monday = datum(2019, 8, 19);
        for (offset, expected) in Weekday::ALL.iter().enumerate() {
            let date = monday.add_days(offset as u32).unwrap();
            assert_eq!(date.weekday(), *expected, "offset {offset}");
        }
    }

    #[test]
    fn test_known_weekdays() {
        struct TestCase {
            date: (u16, u8, u8),
            expected: Weekday,
            description: &'static str,
        }

        let cases = [
            TestCase {
                date: (2000, 1, 1),
                expected: Weekday::Saturday,
                description: "turn of the millennium",
            },
            TestCase {
                date: (1970, 1, 1),
                expected: Weekday::Thursday,
                description: "Unix epoch",
            },
            TestCase {
                date: (1, 1, 1),
                expected: Weekday::Monday,
                description: "proleptic Gregorian year 1",
            },
            TestCase {
                date: (0, 1, 1),
                expected: Weekday::Saturday,
                description: "start of the supported range",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(
                datum(y, m, d).weekday(),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_ordinal_roundtrip() {
        for weekday in Weekday::ALL {
            assert_eq!(Weekday::from_ordinal(weekday.ordinal()), Some(weekday));
        }
        assert_eq!(Weekday::from_ordinal(7), None);
        assert_eq!(Weekday::from_ordinal(255), None);
    }

    #[test]
    fn test_ordinals_are_fixed() {
        assert_eq!(Weekday::Monday.ordinal(), 0);
        assert_eq!(Weekday::Sunday.ordinal(), 6);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Weekday::ALL.iter().map(|w| w.label()).collect();
        assert_eq!(labels, ["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Weekday::Wednesday.to_string(), "wed");
        assert_eq!(datum(1988, 9, 11).weekday_label(), "sun");
    }
}
