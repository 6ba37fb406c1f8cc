//! Difficulty adjustment from study efficiency.
//!
//! Compares pages-per-minute achieved against pages-per-minute planned.
//! Working much faster than planned suggests a harder rating; much slower,
//! an easier one.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MIN_DIFFICULTY: u32 = 1;
const MAX_DIFFICULTY: u32 = 5;
const UP_RATIO: f64 = 1.25;
const DOWN_RATIO: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suggestion {
    Up,
    Down,
    Keep,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyAdjustment {
    /// Actual over target efficiency, rounded to two decimals.
    pub efficiency_ratio: f64,
    pub suggestion: Suggestion,
    pub current_difficulty: u32,
    pub recommended_difficulty: u32,
    pub feedback: String,
}

/// Suggest the next difficulty rating for a subject.
///
/// # Errors
/// Rejects a `current` rating outside 1..=5, zero minutes on either side, or
/// a zero page target.
pub fn suggest_difficulty(
    current: u32,
    target_minutes: u32,
    target_pages: u32,
    actual_minutes: u32,
    actual_pages: u32,
) -> Result<DifficultyAdjustment, ValidationError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&current) {
        return Err(ValidationError::InvalidValue {
            field: "current_difficulty".into(),
            message: format!("must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}"),
        });
    }
    for (field, value) in [
        ("target_minutes", target_minutes),
        ("target_pages", target_pages),
        ("actual_minutes", actual_minutes),
    ] {
        if value == 0 {
            return Err(ValidationError::InvalidValue {
                field: field.into(),
                message: "must be greater than zero".into(),
            });
        }
    }

    let target_efficiency = f64::from(target_pages) / f64::from(target_minutes);
    let actual_efficiency = f64::from(actual_pages) / f64::from(actual_minutes);
    let ratio = actual_efficiency / target_efficiency;

    let (suggestion, recommended) = if ratio >= UP_RATIO {
        (Suggestion::Up, (current + 1).min(MAX_DIFFICULTY))
    } else if ratio <= DOWN_RATIO {
        (Suggestion::Down, (current - 1).max(MIN_DIFFICULTY))
    } else {
        (Suggestion::Keep, current)
    };

    Ok(DifficultyAdjustment {
        efficiency_ratio: (ratio * 100.0).round() / 100.0,
        suggestion,
        current_difficulty: current,
        recommended_difficulty: recommended,
        feedback: feedback(suggestion, ratio),
    })
}

fn feedback(suggestion: Suggestion, ratio: f64) -> String {
    match suggestion {
        Suggestion::Up => format!(
            "You studied at about {ratio:.1}x the planned pace; try the next difficulty up."
        ),
        Suggestion::Down => format!(
            "You studied at about {ratio:.1}x the planned pace; stepping the difficulty down may ease the load."
        ),
        Suggestion::Keep => format!(
            "Your pace is steady at about {ratio:.1}x the plan; keep the current difficulty."
        ),
    }
}
