//! Fines and the monthly settlement.
//!
//! Each partial or absent day carries a fine from the group's schedule;
//! complete days are free.

use serde::{Deserialize, Serialize};

use super::summary::month_tally;
use super::{AttendanceRecord, Mark, MarkTally};

pub const DEFAULT_PARTIAL_FINE: u64 = 1000;
pub const DEFAULT_ABSENT_FINE: u64 = 2000;

/// Fine per marked day, set by the group owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FineSchedule {
    pub partial: u64,
    pub absent: u64,
}

impl Default for FineSchedule {
    fn default() -> Self {
        Self {
            partial: DEFAULT_PARTIAL_FINE,
            absent: DEFAULT_ABSENT_FINE,
        }
    }
}

impl FineSchedule {
    pub fn fine_for(&self, mark: Mark) -> u64 {
        match mark {
            Mark::Complete => 0,
            Mark::Partial => self.partial,
            Mark::Absent => self.absent,
        }
    }

    pub fn total(&self, tally: &MarkTally) -> u64 {
        u64::from(tally.partial)
            .saturating_mul(self.partial)
            .saturating_add(u64::from(tally.absent).saturating_mul(self.absent))
    }
}

/// One member's month: mark counts and the fine they add up to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySettlement {
    pub year: i32,
    pub month: u32,
    pub tally: MarkTally,
    pub total_fine: u64,
}

/// Settle `year`-`month` from `record` using `fines`.
pub fn monthly_settlement(
    record: &AttendanceRecord,
    year: i32,
    month: u32,
    fines: &FineSchedule,
) -> MonthlySettlement {
    let tally = month_tally(record, year, month);
    MonthlySettlement {
        year,
        month,
        total_fine: fines.total(&tally),
        tally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn october_record() -> AttendanceRecord {
        let mut record = AttendanceRecord::new();
        record.insert(date(2026, 9, 30), Mark::Absent);
        record.insert(date(2026, 10, 1), Mark::Complete);
        record.insert(date(2026, 10, 2), Mark::Partial);
        record.insert(date(2026, 10, 3), Mark::Absent);
        record.insert(date(2026, 10, 4), Mark::Absent);
        record
    }

    #[test]
    fn default_schedule_fines_partial_and_absent_days() {
        let fines = FineSchedule::default();
        assert_eq!(fines.fine_for(Mark::Complete), 0);
        assert_eq!(fines.fine_for(Mark::Partial), 1000);
        assert_eq!(fines.fine_for(Mark::Absent), 2000);
    }

    #[test]
    fn settlement_sums_only_that_month() {
        let settlement = monthly_settlement(&october_record(), 2026, 10, &FineSchedule::default());
        assert_eq!(settlement.tally, MarkTally { complete: 1, partial: 1, absent: 2 });
        assert_eq!(settlement.total_fine, 1000 + 2 * 2000);

        let september = monthly_settlement(&october_record(), 2026, 9, &FineSchedule::default());
        assert_eq!(september.total_fine, 2000);
    }

    #[test]
    fn custom_schedule_changes_the_total() {
        let fines = FineSchedule { partial: 0, absent: 500 };
        let settlement = monthly_settlement(&october_record(), 2026, 10, &fines);
        assert_eq!(settlement.total_fine, 1000);
    }

    #[test]
    fn empty_month_owes_nothing() {
        let settlement =
            monthly_settlement(&AttendanceRecord::new(), 2026, 11, &FineSchedule::default());
        assert_eq!(settlement.tally.total(), 0);
        assert_eq!(settlement.total_fine, 0);
    }
}
