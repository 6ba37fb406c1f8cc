//! Month and week attendance tallies.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, Mark};

/// Count of each mark over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkTally {
    pub complete: u32,
    pub partial: u32,
    pub absent: u32,
}

impl MarkTally {
    pub fn add(&mut self, mark: Mark) {
        match mark {
            Mark::Complete => self.complete += 1,
            Mark::Partial => self.partial += 1,
            Mark::Absent => self.absent += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.complete + self.partial + self.absent
    }
}

/// Tally marks recorded in the given month.
pub fn month_tally(record: &AttendanceRecord, year: i32, month: u32) -> MarkTally {
    let mut tally = MarkTally::default();
    record
        .iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .for_each(|(_, mark)| tally.add(*mark));
    tally
}

/// Monday of the week containing `day`. Sunday closes the week.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = day.weekday().num_days_from_monday();
    day - Duration::days(i64::from(offset))
}

/// Tally marks in the Monday-start week containing `today`.
pub fn week_tally(record: &AttendanceRecord, today: NaiveDate) -> MarkTally {
    let monday = week_start(today);
    let mut tally = MarkTally::default();
    for date in monday.iter_days().take(7) {
        if let Some(mark) = record.get(&date) {
            tally.add(*mark);
        }
    }
    tally
}

/// Weekly report with the tally and a couple of fixed hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub tally: MarkTally,
    pub hints: Vec<String>,
}

impl WeeklySummary {
    pub fn for_week(record: &AttendanceRecord, today: NaiveDate) -> Self {
        let week_start = week_start(today);
        Self {
            week_start,
            week_end: week_start + Duration::days(6),
            tally: week_tally(record, today),
            hints: vec![
                "Look for the weekdays where attendance tends to break off.".to_string(),
                "Setting the time goal too high tends to add partial and absent days.".to_string(),
            ],
        }
    }
}
