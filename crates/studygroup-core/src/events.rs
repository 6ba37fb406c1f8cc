use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::attendance::Mark;

/// Every state change in the system produces an Event.
/// The CLI prints them; a no-op command produces none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        started_at_ms: u64,
        accumulated_ms: u64,
    },
    TimerStopped {
        stopped_at_ms: u64,
        /// Length of the interval that just ended.
        interval_ms: u64,
        accumulated_ms: u64,
    },
    TimerReset,
    GroupCreated {
        group_id: String,
        name: String,
    },
    GroupJoined {
        group_id: String,
        email: String,
        /// False when the user was already a member.
        newly_joined: bool,
    },
    GroupDeleted {
        group_id: String,
    },
    SubjectAdded {
        group_id: String,
        name: String,
        index: usize,
    },
    SubjectRemoved {
        group_id: String,
        name: String,
    },
    FinesUpdated {
        group_id: String,
        partial: u64,
        absent: u64,
    },
    AttendanceMarked {
        group_id: String,
        date: NaiveDate,
        mark: Mark,
        /// Mark that was overwritten, if any.
        previous: Option<Mark>,
    },
}
