use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use strum::{AsRefStr, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Custom error type for parsing days
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ParseDayError {
    EmptyInput,
    /// Sunday is a real day, but no lessons are scheduled on it
    NotATeachingDay,
    Unknown(String),
}

impl Display for ParseDayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptyInput => write!(f, "Empty input string"),
            Self::NotATeachingDay => write!(f, "Sunday is not a teaching day"),
            Self::Unknown(day) => write!(f, "Unknown day: {day}"),
        }
    }
}

/// Represents a day of the week on which lessons can be scheduled
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Every teaching day, in week order
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Position of the day within the week, Monday being 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a calendar weekday onto the teaching week
    ///
    /// # Returns
    /// `None` for Sunday
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon => Some(Self::Monday),
            Weekday::Tue => Some(Self::Tuesday),
            Weekday::Wed => Some(Self::Wednesday),
            Weekday::Thu => Some(Self::Thursday),
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat => Some(Self::Saturday),
            Weekday::Sun => None,
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Self::Monday => Weekday::Mon,
            Self::Tuesday => Weekday::Tue,
            Self::Wednesday => Weekday::Wed,
            Self::Thursday => Weekday::Thu,
            Self::Friday => Weekday::Fri,
            Self::Saturday => Weekday::Sat,
        }
    }
}

impl FromStr for Day {
    type Err = ParseDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDayError::EmptyInput);
        }

        if s.eq_ignore_ascii_case("sunday") {
            return Err(ParseDayError::NotATeachingDay);
        }

        Self::iter()
            .find(|day| day.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDayError::Unknown(s.to_string()))
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
