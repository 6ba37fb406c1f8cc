//! Daily goal allocation.
//!
//! Splits a daily study budget across subjects by weight
//! (`importance + difficulty`, at least 1). Every subject gets at least one
//! minute and one page, however skewed the weights are.

mod difficulty;

pub use difficulty::{suggest_difficulty, DifficultyAdjustment, Suggestion};

use serde::{Deserialize, Serialize};

use crate::error::PreconditionError;
use crate::state::Subject;

/// Today's target for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalAllocation {
    pub name: String,
    pub weight: u64,
    pub minutes: u64,
    pub pages: u64,
}

/// Allocation weight for a subject.
pub fn weight(subject: &Subject) -> u64 {
    (u64::from(subject.importance) + u64::from(subject.difficulty)).max(1)
}

/// Allocate `total_minutes` across `subjects`.
///
/// # Errors
/// `NoSubjects` for an empty list, `NonPositiveMinutes` when
/// `total_minutes <= 0`.
pub fn allocate(
    subjects: &[Subject],
    total_minutes: i64,
) -> Result<Vec<GoalAllocation>, PreconditionError> {
    if subjects.is_empty() {
        return Err(PreconditionError::NoSubjects);
    }
    if total_minutes <= 0 {
        return Err(PreconditionError::NonPositiveMinutes(total_minutes));
    }

    let weights: Vec<u64> = subjects.iter().map(weight).collect();
    let sum: u64 = weights.iter().sum();

    let allocations = subjects
        .iter()
        .zip(&weights)
        .map(|(subject, &w)| {
            let ratio = w as f64 / sum as f64;
            let minutes = round_at_least_one(total_minutes as f64 * ratio);
            let daily_pages =
                f64::from(subject.total_pages) / f64::from(subject.period_days.max(1));
            let pages = round_at_least_one(daily_pages * ratio);
            GoalAllocation {
                name: subject.name.clone(),
                weight: w,
                minutes,
                pages,
            }
        })
        .collect();

    Ok(allocations)
}

fn round_at_least_one(value: f64) -> u64 {
    (value.round() as u64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, importance: u32, difficulty: u32, pages: u32, days: u32) -> Subject {
        Subject {
            name: name.to_string(),
            total_pages: pages,
            importance,
            difficulty,
            period_days: days,
        }
    }

    #[test]
    fn splits_minutes_by_weight() {
        let subjects = vec![subject("a", 1, 1, 100, 10), subject("b", 5, 5, 100, 10)];
        let goals = allocate(&subjects, 60).unwrap();
        assert_eq!(goals[0].weight, 2);
        assert_eq!(goals[1].weight, 10);
        assert_eq!(goals[0].minutes, 10);
        assert_eq!(goals[1].minutes, 50);
    }

    #[test]
    fn page_targets_follow_daily_share() {
        // 300 pages over 10 days = 30/day; weights 2 and 10 of 12.
        let subjects = vec![subject("a", 1, 1, 300, 10), subject("b", 5, 5, 300, 10)];
        let goals = allocate(&subjects, 60).unwrap();
        assert_eq!(goals[0].pages, 5);
        assert_eq!(goals[1].pages, 25);
    }

    #[test]
    fn zero_weight_subject_counts_as_one() {
        let subjects = vec![subject("light", 0, 0, 0, 1), subject("heavy", 50, 49, 10, 1)];
        let goals = allocate(&subjects, 10).unwrap();
        assert_eq!(goals[0].weight, 1);
        assert_eq!(goals[0].minutes, 1);
        assert_eq!(goals[0].pages, 1);
        assert_eq!(goals[1].minutes, 10);
    }

    #[test]
    fn zero_period_days_treated_as_one() {
        let subjects = vec![subject("a", 1, 1, 40, 0)];
        let goals = allocate(&subjects, 30).unwrap();
        assert_eq!(goals[0].pages, 40);
        assert_eq!(goals[0].minutes, 30);
    }

    #[test]
    fn rejects_empty_subjects() {
        assert_eq!(allocate(&[], 60), Err(PreconditionError::NoSubjects));
    }

    #[test]
    fn rejects_non_positive_minutes() {
        let subjects = vec![subject("a", 1, 1, 10, 1)];
        assert_eq!(
            allocate(&subjects, 0),
            Err(PreconditionError::NonPositiveMinutes(0))
        );
        assert_eq!(
            allocate(&subjects, -5),
            Err(PreconditionError::NonPositiveMinutes(-5))
        );
    }

    #[test]
    fn allocation_is_idempotent() {
        let subjects = vec![
            subject("a", 3, 2, 120, 7),
            subject("b", 1, 4, 80, 3),
            subject("c", 2, 2, 500, 30),
        ];
        assert_eq!(allocate(&subjects, 95), allocate(&subjects, 95));
    }
}
