//! Page-progress entries.
//!
//! The structured [`PageEntry`] list is the primary input. Free-text logs
//! (one `goal 20 / actual 18` per line) are parsed into the same entries.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accepts both English and Korean keywords; the slash is optional.
static PAGE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:goal|목표)\s*([0-9]+)\s*/?\s*(?:actual|실제)\s*([0-9]+)")
        .expect("valid page line regex")
});

/// Goal vs. actual pages for one subject on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Free label, empty when the log line had no prefix.
    #[serde(default)]
    pub subject: String,
    pub goal_pages: u32,
    pub actual_pages: u32,
}

impl PageEntry {
    pub fn new(subject: impl Into<String>, goal_pages: u32, actual_pages: u32) -> Self {
        Self {
            subject: subject.into(),
            goal_pages,
            actual_pages,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.actual_pages >= self.goal_pages
    }

    /// Parse a single log line. Returns `None` when the line does not
    /// contain the goal/actual pattern.
    pub fn parse_line(line: &str) -> Option<Self> {
        let caps = PAGE_LINE_RE.captures(line)?;
        let whole = caps.get(0)?;
        let goal_pages = saturating_count(&caps[1]);
        let actual_pages = saturating_count(&caps[2]);
        let subject = line[..whole.start()]
            .trim()
            .trim_end_matches(':')
            .trim()
            .to_string();
        Some(Self {
            subject,
            goal_pages,
            actual_pages,
        })
    }
}

/// ASCII digits as a page count, clamped to `u32::MAX` on overflow.
fn saturating_count(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Parsed page log: matched entries plus how many lines were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProgress {
    pub entries: Vec<PageEntry>,
    /// Non-blank lines that did not match the pattern.
    pub unmatched_lines: usize,
}

impl PageProgress {
    pub fn from_entries(entries: Vec<PageEntry>) -> Self {
        Self {
            entries,
            unmatched_lines: 0,
        }
    }

    /// Parse a free-text log, one entry per line.
    pub fn parse(text: &str) -> Self {
        let mut progress = Self::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match PageEntry::parse_line(line) {
                Some(entry) => progress.entries.push(entry),
                None => progress.unmatched_lines += 1,
            }
        }
        progress
    }

    pub fn matched_count(&self) -> usize {
        self.entries.len()
    }

    pub fn satisfied_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_satisfied()).count()
    }

    /// At least one entry, and every entry met its goal.
    pub fn is_satisfied(&self) -> bool {
        self.matched_count() > 0 && self.satisfied_count() == self.matched_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_line() {
        let entry = PageEntry::parse_line("goal 20 / actual 18").unwrap();
        assert_eq!(entry, PageEntry::new("", 20, 18));
        assert!(!entry.is_satisfied());
    }

    #[test]
    fn parses_korean_line_without_slash() {
        let entry = PageEntry::parse_line("목표 10 실제 12").unwrap();
        assert_eq!(entry.goal_pages, 10);
        assert_eq!(entry.actual_pages, 12);
    }

    #[test]
    fn keeps_subject_prefix() {
        let entry = PageEntry::parse_line("Linear Algebra: Goal 15/Actual 15").unwrap();
        assert_eq!(entry.subject, "Linear Algebra");
        assert!(entry.is_satisfied());
    }

    #[test]
    fn rejects_line_without_pattern() {
        assert!(PageEntry::parse_line("read chapter 3").is_none());
        assert!(PageEntry::parse_line("goal twenty / actual 3").is_none());
    }

    #[test]
    fn oversized_numbers_still_match() {
        let entry = PageEntry::parse_line("goal 99999999999 / actual 0").unwrap();
        assert_eq!(entry.goal_pages, u32::MAX);
        assert!(!entry.is_satisfied());

        let progress = PageProgress::parse("goal 5 / actual 5\ngoal 99999999999 / actual 0");
        assert_eq!(progress.matched_count(), 2);
        assert_eq!(progress.unmatched_lines, 0);
        assert!(!progress.is_satisfied());
    }

    #[test]
    fn counts_matched_and_unmatched() {
        let progress = PageProgress::parse("goal 20 / actual 22\n\n  notes  \ngoal 5 / actual 1\n");
        assert_eq!(progress.matched_count(), 2);
        assert_eq!(progress.satisfied_count(), 1);
        assert_eq!(progress.unmatched_lines, 1);
        assert!(!progress.is_satisfied());
    }

    #[test]
    fn empty_log_is_not_satisfied() {
        assert!(!PageProgress::parse("").is_satisfied());
        assert!(!PageProgress::parse("just some text").is_satisfied());
    }

    #[test]
    fn structured_entries_share_semantics() {
        let progress = PageProgress::from_entries(vec![
            PageEntry::new("Physics", 10, 10),
            PageEntry::new("History", 4, 9),
        ]);
        assert!(progress.is_satisfied());
    }
}
