use models::attendance::{AttendanceMark, AttendanceStatus, AttendanceSummary, SessionSummary};

/// Counts the attendance marks of one lesson occurrence
///
/// Marks with a status other than present, late or absent still count
/// toward `total`, so the per-status counts can fall short of it. That gap
/// is a data-quality signal for the caller and is left as is.
pub fn summarize(marks: &[AttendanceMark]) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        total: marks.len(),
        marked: !marks.is_empty(),
        ..Default::default()
    };

    for mark in marks {
        match mark.kind() {
            Some(AttendanceStatus::Present) => summary.present += 1,
            Some(AttendanceStatus::Late) => summary.late += 1,
            Some(AttendanceStatus::Absent) => summary.absent += 1,
            Some(AttendanceStatus::Unmarked) | None => {}
        }
    }

    summary
}

/// Combines per-lesson summaries, e.g. all lessons of a day
pub fn summarize_session<I>(summaries: I) -> SessionSummary
where
    I: IntoIterator<Item = AttendanceSummary>,
{
    summaries
        .into_iter()
        .fold(SessionSummary::default(), |mut session, summary| {
            session.lessons += 1;
            if summary.marked {
                session.marked_lessons += 1;
            } else {
                session.unmarked_lessons += 1;
            }
            session.totals += summary;
            session
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks(statuses: &[&str]) -> Vec<AttendanceMark> {
        statuses.iter().map(|s| AttendanceMark::new(s)).collect()
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(
            summarize(&[]),
            AttendanceSummary {
                total: 0,
                present: 0,
                late: 0,
                absent: 0,
                marked: false,
            }
        );
    }

    #[test]
    fn test_counts() {
        let summary = summarize(&marks(&["Present", "Present", "Late", "Absent"]));
        assert_eq!(
            summary,
            AttendanceSummary {
                total: 4,
                present: 2,
                late: 1,
                absent: 1,
                marked: true,
            }
        );
    }

    #[test]
    fn test_unknown_statuses_only_in_total() {
        let summary = summarize(&marks(&["Present", "Excused", "", "Unmarked"]));

        assert_eq!(summary.total, 4);
        assert_eq!(summary.present, 1);
        assert_eq!(summary.late + summary.absent, 0);
        assert!(summary.marked);
        assert!(summary.present + summary.late + summary.absent < summary.total);
    }

    #[test]
    fn test_session_summary() {
        let session = summarize_session(vec![
            summarize(&marks(&["Present", "Absent"])),
            summarize(&[]),
            summarize(&marks(&["Late"])),
        ]);

        assert_eq!(session.lessons, 3);
        assert_eq!(session.marked_lessons, 2);
        assert_eq!(session.unmarked_lessons, 1);
        assert_eq!(
            session.totals,
            AttendanceSummary {
                total: 3,
                present: 1,
                late: 1,
                absent: 1,
                marked: true,
            }
        );
    }

    #[test]
    fn test_empty_session() {
        let session = summarize_session(Vec::new());
        assert_eq!(session, SessionSummary::default());
        assert!(!session.totals.marked);
    }
}
