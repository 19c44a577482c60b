use std::{fmt::Display, str::FromStr};

use chrono::Weekday;
use thiserror::Error;

/// Day text that isn't one of the seven recognized lowercase day names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized day of week: {0:?}")]
pub struct InvalidDayError(pub String);

/// Day of the rolling week. The set is closed, which is what keeps every day present in a
/// [super::log::PracticeLog].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Position in [Day::ALL].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn minutes_key(self) -> String {
        format!("{}_minutes", self.name())
    }

    pub fn notes_key(self) -> String {
        format!("{}_notes", self.name())
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Day {
    type Err = InvalidDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.name() == s)
            .ok_or_else(|| InvalidDayError(s.to_owned()))
    }
}

impl From<Weekday> for Day {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::{Day, InvalidDayError};

    #[test]
    fn test_day_parsing() {
        for day in Day::ALL {
            assert_eq!(day.name().parse::<Day>(), Ok(day));
        }
        assert_eq!(
            "funday".parse::<Day>(),
            Err(InvalidDayError("funday".into()))
        );
        // Only the exact lowercase literals are recognized.
        assert!("Monday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_keys() {
        assert_eq!(Day::Wednesday.minutes_key(), "wednesday_minutes");
        assert_eq!(Day::Sunday.notes_key(), "sunday_notes");
        assert_eq!(Day::Sunday.index(), 6);
    }

    #[test]
    fn test_day_from_weekday() {
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
    }
}
