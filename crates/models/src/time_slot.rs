use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    ops::Deref,
    str::FromStr,
};
use strum::{AsRefStr, EnumString};

/// Identifier of a time slot, as assigned by the API
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeSlotId(pub u32);

impl Deref for TimeSlotId {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for TimeSlotId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TimeSlotId)
    }
}

impl Display for TimeSlotId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Represents a time range for a lesson period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a new `TimeRange` if `begin` is before `end`
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Option<Self> {
        (begin < end).then_some(Self { begin, end })
    }

    /// Parses two wall-clock strings and creates a `TimeRange` if valid.
    /// # Returns
    /// `Some(TimeRange)` if parsing succeeds and `begin` is before `end`
    pub fn from_strings(begin: &str, end: &str) -> Option<Self> {
        Self::new(parse_wall_clock(begin)?, parse_wall_clock(end)?)
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} - {}",
            self.begin.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Parses `HH:MM:SS` or `HH:MM`
pub fn parse_wall_clock(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// A named period of the teaching day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    /// Position in the school's fixed period sequence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl TimeSlot {
    pub fn new(id: u32, name: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            id: TimeSlotId(id),
            name: name.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            order: None,
        }
    }

    pub fn with_order(self, order: u32) -> Self {
        Self {
            order: Some(order),
            ..self
        }
    }

    pub fn start(&self) -> Option<NaiveTime> {
        parse_wall_clock(&self.start_time)
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        TimeRange::from_strings(&self.start_time, &self.end_time)
    }

    /// Formats the slot as `HH:MM - HH:MM`, dropping any seconds
    pub fn display_range(&self) -> String {
        match self.time_range() {
            Some(range) => range.to_string(),
            None => format!(
                "{} - {}",
                clip_seconds(&self.start_time),
                clip_seconds(&self.end_time)
            ),
        }
    }
}

fn clip_seconds(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

/// Fallback periods used when the API has no time slots configured
const DEFAULT_SLOTS: [(u32, &str, &str, &str); 6] = [
    (1, "1st period", "08:00", "09:30"),
    (2, "2nd period", "09:40", "11:10"),
    (3, "3rd period", "11:20", "12:50"),
    (4, "4th period", "13:30", "15:00"),
    (5, "5th period", "15:10", "16:40"),
    (6, "6th period", "16:50", "18:20"),
];

/// Which client's fallback period table to use
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlotProfile {
    /// Five periods, ending at 16:40
    #[default]
    Web,
    /// Six periods, ending at 18:20
    Mobile,
}

impl TimeSlotProfile {
    pub fn slot_count(self) -> usize {
        match self {
            Self::Web => 5,
            Self::Mobile => 6,
        }
    }

    pub fn defaults(self) -> Vec<TimeSlot> {
        DEFAULT_SLOTS
            .iter()
            .take(self.slot_count())
            .map(|&(id, name, start, end)| TimeSlot::new(id, name, start, end).with_order(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall_clock() {
        let expected = NaiveTime::from_hms_opt(9, 40, 0);
        assert_eq!(parse_wall_clock("09:40"), expected);
        assert_eq!(parse_wall_clock("09:40:00"), expected);
        assert_eq!(parse_wall_clock("9.40"), None);
        assert_eq!(parse_wall_clock(""), None);
    }

    #[test]
    fn test_time_range_requires_order() {
        assert!(TimeRange::from_strings("08:00", "09:30").is_some());
        assert!(TimeRange::from_strings("09:30", "08:00").is_none());
        assert!(TimeRange::from_strings("08:00", "08:00").is_none());
    }

    #[test]
    fn test_display_range() {
        let slot = TimeSlot::new(2, "2nd period", "09:40:00", "11:10:00");
        assert_eq!(slot.display_range(), "09:40 - 11:10");

        // Unparseable times are still clipped for display
        let slot = TimeSlot::new(9, "Evening", "18:30:xx", "late");
        assert_eq!(slot.display_range(), "18:30 - late");
    }

    #[test]
    fn test_profile_defaults() {
        let web = TimeSlotProfile::Web.defaults();
        assert_eq!(web.len(), 5);
        assert_eq!(web[0].id, TimeSlotId(1));
        assert_eq!(web[4].end_time, "16:40");
        assert_eq!(web[4].order, Some(5));

        let mobile = TimeSlotProfile::Mobile.defaults();
        assert_eq!(mobile.len(), 6);
        assert_eq!(mobile[5].start_time, "16:50");
        assert_eq!(&mobile[..5], &web[..]);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(TimeSlotProfile::from_str("web"), Ok(TimeSlotProfile::Web));
        assert_eq!(
            TimeSlotProfile::from_str("Mobile"),
            Ok(TimeSlotProfile::Mobile)
        );
        assert!(TimeSlotProfile::from_str("tablet").is_err());
        assert_eq!(TimeSlotProfile::default(), TimeSlotProfile::Web);
    }

    #[test]
    fn test_time_slot_id_json() {
        let slot = TimeSlot::new(3, "3rd period", "11:20", "12:50");
        let value = serde_json::to_value(&slot).unwrap();
        assert_eq!(value["id"], 3);
        assert!(value.get("order").is_none());

        let value = serde_json::to_value(slot.with_order(3)).unwrap();
        assert_eq!(value["order"], 3);
        assert_eq!(TimeSlotId::from_str(" 3 "), Ok(TimeSlotId(3)));
    }
}
