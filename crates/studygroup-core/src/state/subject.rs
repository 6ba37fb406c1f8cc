use serde::{Deserialize, Serialize};

use super::input::{parse_count, require_text};
use crate::error::ValidationError;

/// A subject on one member's study list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub total_pages: u32,
    pub importance: u32,
    pub difficulty: u32,
    /// Days to finish the subject, at least 1.
    pub period_days: u32,
}

/// Raw form input for a new subject, validated before anything is stored.
#[derive(Debug, Clone, Default)]
pub struct SubjectDraft {
    pub name: String,
    pub total_pages: String,
    pub importance: String,
    pub difficulty: String,
    pub period_days: String,
}

impl SubjectDraft {
    /// # Errors
    /// Empty name, any non-numeric field, or a zero period.
    pub fn validate(&self) -> Result<Subject, ValidationError> {
        let name = require_text("name", &self.name)?;
        let total_pages = parse_count("total_pages", &self.total_pages)?;
        let importance = parse_count("importance", &self.importance)?;
        let difficulty = parse_count("difficulty", &self.difficulty)?;
        let period_days = parse_count("period_days", &self.period_days)?;
        if period_days == 0 {
            return Err(ValidationError::InvalidValue {
                field: "period_days".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(Subject {
            name,
            total_pages,
            importance,
            difficulty,
            period_days,
        })
    }
}
