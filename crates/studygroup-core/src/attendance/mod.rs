//! Daily attendance marks.
//!
//! A day is **complete** when every page goal was met, **partial** when only
//! the time goal was met, and **absent** otherwise. A zero-minute goal never
//! counts as met.

mod pages;
mod ranking;
mod settlement;
mod summary;

pub use pages::{PageEntry, PageProgress};
pub use ranking::{rank_members, MemberStats, RankingRow};
pub use settlement::{monthly_settlement, FineSchedule, MonthlySettlement};
pub use summary::{month_tally, week_start, week_tally, MarkTally, WeeklySummary};

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-member attendance: one mark per calendar date.
pub type AttendanceRecord = BTreeMap<NaiveDate, Mark>;

/// Per-member minutes actually studied on each recorded date.
pub type MinutesRecord = BTreeMap<NaiveDate, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Complete,
    Partial,
    Absent,
}

impl Mark {
    /// Display symbol used on the calendar.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Complete => "O",
            Mark::Partial => "△",
            Mark::Absent => "X",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mark::Complete => "complete",
            Mark::Partial => "partial",
            Mark::Absent => "absent",
        };
        write!(f, "{name}")
    }
}

/// Classify a day from time and page progress.
pub fn classify(goal_minutes: u32, actual_minutes: u32, pages: &PageProgress) -> Mark {
    if pages.is_satisfied() {
        Mark::Complete
    } else if actual_minutes >= goal_minutes && goal_minutes > 0 {
        Mark::Partial
    } else {
        Mark::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_failed_page_line_falls_back_to_time() {
        let pages = PageProgress::parse("goal 20 / actual 18\ngoal 10 / actual 10");
        assert_eq!(classify(30, 25, &pages), Mark::Absent);
        assert_eq!(classify(30, 30, &pages), Mark::Partial);
    }

    #[test]
    fn unmet_oversized_goal_is_not_complete() {
        let pages = PageProgress::parse("goal 5 / actual 5\ngoal 99999999999 / actual 0");
        assert_eq!(classify(30, 0, &pages), Mark::Absent);
    }

    #[test]
    fn satisfied_pages_win_regardless_of_minutes() {
        let pages = PageProgress::parse("goal 20 / actual 22");
        assert_eq!(classify(30, 0, &pages), Mark::Complete);
        assert_eq!(classify(0, 0, &pages), Mark::Complete);
        assert_eq!(classify(120, 500, &pages), Mark::Complete);
    }

    #[test]
    fn empty_log_with_time_met_is_partial() {
        assert_eq!(classify(30, 35, &PageProgress::default()), Mark::Partial);
    }

    #[test]
    fn zero_goal_minutes_is_never_partial() {
        assert_eq!(classify(0, 0, &PageProgress::default()), Mark::Absent);
        assert_eq!(classify(0, 90, &PageProgress::default()), Mark::Absent);
    }

    #[test]
    fn mark_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mark::Partial).unwrap(), "\"partial\"");
        assert_eq!(Mark::Partial.symbol(), "△");
    }

    #[test]
    fn record_keys_are_iso_dates() {
        let mut record = AttendanceRecord::new();
        record.insert(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(), Mark::Complete);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"2026-03-09":"complete"}"#);
        let back: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
