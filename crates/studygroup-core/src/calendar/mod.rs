//! Month calendar grid.
//!
//! Weeks start on Sunday. The grid is the leading blank cells before the
//! first day plus one cell per day of the month, with the member's mark for
//! that date attached when there is one.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::attendance::{AttendanceRecord, Mark};
use crate::error::ValidationError;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidValue {
                field: "month".into(),
                message: format!("must be between 1 and 12, got {month}"),
            });
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { month: self.month - 1, ..self }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { month: self.month + 1, ..self }
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(self) -> u32 {
        match (self.first_day(), self.next().first_day()) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year_month: YearMonth,
    /// Blank cells before day 1 (weekday of the 1st, Sunday = 0).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Rows of seven cells; `None` pads the first and last weeks.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let mut cells: Vec<Option<&DayCell>> = (0..self.leading_blanks).map(|_| None).collect();
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells.chunks(7).map(<[_]>::to_vec).collect()
    }

    /// Plain-text rendering: a header row then one line per week.
    pub fn render_text(&self) -> String {
        let mut out = format!("{}-{:02}\n", self.year_month.year, self.year_month.month);
        out.push_str(&WEEKDAY_HEADERS.map(|h| format!("{h:>4}")).concat());
        out.push('\n');
        for week in self.weeks() {
            for cell in week {
                match cell {
                    Some(cell) => {
                        let symbol = cell.mark.map(Mark::symbol).unwrap_or(" ");
                        out.push_str(&format!("{:>3}{}", cell.day, symbol));
                    }
                    None => out.push_str("    "),
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Build the grid for `year_month` with marks from `record`.
pub fn month_grid(year_month: YearMonth, record: &AttendanceRecord) -> MonthGrid {
    let leading_blanks = year_month
        .first_day()
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    let days = year_month
        .first_day()
        .into_iter()
        .flat_map(|first| first.iter_days().take(year_month.days_in_month() as usize))
        .map(|date| DayCell {
            day: date.day(),
            date,
            mark: record.get(&date).copied(),
        })
        .collect();
    MonthGrid {
        year_month,
        leading_blanks,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_month() {
        assert!(YearMonth::new(2026, 0).is_err());
        assert!(YearMonth::new(2026, 13).is_err());
        assert!(YearMonth::new(2026, 12).is_ok());
    }

    #[test]
    fn navigation_wraps_years() {
        let jan = YearMonth::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), YearMonth { year: 2025, month: 12 });
        let dec = YearMonth::new(2026, 12).unwrap();
        assert_eq!(dec.next(), YearMonth { year: 2027, month: 1 });
        assert_eq!(dec.prev().next(), dec);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2026, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn wednesday_start_has_three_blanks() {
        // April 2026 begins on a Wednesday.
        let grid = month_grid(YearMonth::new(2026, 4).unwrap(), &AttendanceRecord::new());
        assert_eq!(grid.leading_blanks, 3);
        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.days[0].day, 1);
        assert_eq!(grid.days[29].day, 30);
    }

    #[test]
    fn sunday_start_has_no_blanks() {
        let grid = month_grid(YearMonth::new(2026, 2).unwrap(), &AttendanceRecord::new());
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.weeks().len(), 4);
    }

    #[test]
    fn marks_attach_to_their_dates() {
        let mut record = AttendanceRecord::new();
        let date = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
        record.insert(date, Mark::Partial);
        let grid = month_grid(YearMonth::of(date), &record);
        assert_eq!(grid.days[13].mark, Some(Mark::Partial));
        assert_eq!(grid.days[12].mark, None);
        assert!(grid.render_text().contains(" 14△"));
    }

    #[test]
    fn weeks_are_padded_to_seven() {
        let grid = month_grid(YearMonth::new(2026, 10).unwrap(), &AttendanceRecord::new());
        let weeks = grid.weeks();
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks[0][..4].iter().all(Option::is_none));
        assert_eq!(weeks[0][4].map(|c| c.day), Some(1));
    }
}
