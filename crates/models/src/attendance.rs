use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign},
    str::FromStr,
};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Outcome of a student's attendance at one lesson occurrence
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    /// The lesson took place but nothing has been recorded yet
    Unmarked,
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::iter()
            .find(|status| status.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown attendance status: {s}"))
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_ref())
    }
}

/// A single attendance sub-record attached to a lesson occurrence
///
/// The status stays a raw string so that values this crate does not know
/// (e.g. `Excused`) still reach the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceMark {
    #[serde(default)]
    pub status: String,
}

impl AttendanceMark {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }

    /// The recognized status, if any
    pub fn kind(&self) -> Option<AttendanceStatus> {
        self.status.parse().ok()
    }
}

/// Attendance counts for one lesson occurrence
///
/// `total` counts every mark, including ones whose status is not
/// present/late/absent, so the per-status counts may not add up to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub marked: bool,
}

impl AttendanceSummary {
    /// Percentages of `total`, rounded to one decimal place
    pub fn rates(&self) -> AttendanceRates {
        if self.total == 0 {
            return AttendanceRates::default();
        }

        let rate = |count: usize| (count as f64 * 1000.0 / self.total as f64).round() / 10.0;

        AttendanceRates {
            present: rate(self.present),
            late: rate(self.late),
            absent: rate(self.absent),
        }
    }
}

impl Add for AttendanceSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let total = self.total + rhs.total;
        Self {
            total,
            present: self.present + rhs.present,
            late: self.late + rhs.late,
            absent: self.absent + rhs.absent,
            marked: total > 0,
        }
    }
}

impl AddAssign for AttendanceSummary {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Attendance percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRates {
    pub present: f64,
    pub late: f64,
    pub absent: f64,
}

/// Attendance across all lessons of a session (a day, a week, a report)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub lessons: usize,
    pub marked_lessons: usize,
    pub unmarked_lessons: usize,
    pub totals: AttendanceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            AttendanceStatus::from_str("Present"),
            Ok(AttendanceStatus::Present)
        );
        assert_eq!(AttendanceStatus::from_str("late"), Ok(AttendanceStatus::Late));
        assert!(AttendanceStatus::from_str("Excused").is_err());
        assert!(AttendanceStatus::from_str("").is_err());
    }

    #[test]
    fn test_mark_kind() {
        assert_eq!(AttendanceMark::new("Absent").kind(), Some(AttendanceStatus::Absent));
        assert_eq!(AttendanceMark::new("Excused").kind(), None);
        assert_eq!(AttendanceMark::default().kind(), None);
    }

    #[test]
    fn test_rates() {
        let summary = AttendanceSummary {
            total: 3,
            present: 2,
            late: 1,
            absent: 0,
            marked: true,
        };

        let rates = summary.rates();
        assert_eq!(rates.present, 66.7);
        assert_eq!(rates.late, 33.3);
        assert_eq!(rates.absent, 0.0);
    }

    #[test]
    fn test_rates_zero_total() {
        assert_eq!(AttendanceSummary::default().rates(), AttendanceRates::default());
    }

    #[test]
    fn test_summary_addition() {
        let a = AttendanceSummary {
            total: 4,
            present: 2,
            late: 1,
            absent: 1,
            marked: true,
        };

        let mut sum = AttendanceSummary::default();
        sum += AttendanceSummary::default();
        assert!(!sum.marked);

        sum += a;
        sum += a;
        assert_eq!(
            sum,
            AttendanceSummary {
                total: 8,
                present: 4,
                late: 2,
                absent: 2,
                marked: true,
            }
        );
    }
}
