//! Member ranking within a group.
//!
//! Order: complete days (desc), then total minutes studied (desc), then
//! name (asc). Ranks start at 1 and are never shared.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, Mark, MinutesRecord};

/// Aggregated attendance for one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub email: String,
    pub name: String,
    pub attendance_count: u32,
    pub total_minutes: u64,
}

impl MemberStats {
    /// Members with no records count as zero.
    pub fn collect(
        email: &str,
        name: &str,
        record: Option<&AttendanceRecord>,
        minutes: Option<&MinutesRecord>,
    ) -> Self {
        let attendance_count = record
            .map(|r| r.values().filter(|m| **m == Mark::Complete).count() as u32)
            .unwrap_or(0);
        let total_minutes = minutes
            .map(|m| m.values().map(|v| u64::from(*v)).sum())
            .unwrap_or(0);
        Self {
            email: email.to_string(),
            name: name.to_string(),
            attendance_count,
            total_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingRow {
    pub rank: usize,
    pub email: String,
    pub name: String,
    pub attendance_count: u32,
    pub total_minutes: u64,
}

pub fn rank_members(mut stats: Vec<MemberStats>) -> Vec<RankingRow> {
    stats.sort_by(|a, b| {
        (Reverse(a.attendance_count), Reverse(a.total_minutes), &a.name)
            .cmp(&(Reverse(b.attendance_count), Reverse(b.total_minutes), &b.name))
    });
    stats
        .into_iter()
        .enumerate()
        .map(|(i, s)| RankingRow {
            rank: i + 1,
            email: s.email,
            name: s.name,
            attendance_count: s.attendance_count,
            total_minutes: s.total_minutes,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stats(name: &str, attendance_count: u32, total_minutes: u64) -> MemberStats {
        MemberStats {
            email: format!("{}@x.io", name.to_lowercase()),
            name: name.to_string(),
            attendance_count,
            total_minutes,
        }
    }

    fn names(rows: &[RankingRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn complete_days_rank_first() {
        let rows = rank_members(vec![stats("Ann", 1, 900), stats("Bo", 3, 10)]);
        assert_eq!(names(&rows), ["Bo", "Ann"]);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn minutes_break_ties_then_name() {
        let rows = rank_members(vec![
            stats("Cy", 2, 60),
            stats("Bo", 2, 120),
            stats("Al", 2, 60),
        ]);
        assert_eq!(names(&rows), ["Bo", "Al", "Cy"]);
        assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn only_complete_marks_count() {
        let d = |day| NaiveDate::from_ymd_opt(2026, 10, day).unwrap();
        let record: AttendanceRecord = [
            (d(1), Mark::Complete),
            (d(2), Mark::Partial),
            (d(3), Mark::Complete),
            (d(4), Mark::Absent),
        ]
        .into_iter()
        .collect();
        let minutes: MinutesRecord = [(d(1), 40), (d(2), 30), (d(3), 50)].into_iter().collect();

        let member = MemberStats::collect("a@x.io", "Ann", Some(&record), Some(&minutes));
        assert_eq!(member.attendance_count, 2);
        assert_eq!(member.total_minutes, 120);
    }

    #[test]
    fn member_without_records_is_zero() {
        let member = MemberStats::collect("a@x.io", "Ann", None, None);
        assert_eq!((member.attendance_count, member.total_minutes), (0, 0));
    }
}
