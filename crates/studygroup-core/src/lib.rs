//! # Study Group Core Library
//!
//! Core logic for the study group manager. The CLI front end is a thin layer
//! over this crate: every operation takes the application state explicitly,
//! mutates it, and hands it back to the caller for persistence.
//!
//! ## Architecture
//!
//! - **Timer**: wall-clock elapsed-time accumulator, one per study group
//! - **Attendance**: daily mark classification, month/week tallies, fines
//!   and member ranking
//! - **Goals**: weighted daily time budget allocation and difficulty tuning
//! - **Calendar**: Sunday-first month grid with attendance marks
//! - **State**: users, groups, members, subjects (the persisted snapshot)
//! - **Storage**: SQLite-backed snapshot store and TOML configuration
//! - **Sync**: best-effort remote subject sync over HTTP
//!
//! ## Key Components
//!
//! - [`TimerState`]: elapsed-time accumulator
//! - [`AppState`]: the whole application snapshot
//! - [`SnapshotStore`]: persistence collaborator
//! - [`Config`]: application configuration management

pub mod attendance;
pub mod calendar;
pub mod error;
pub mod events;
pub mod goals;
pub mod state;
pub mod storage;
pub mod sync;
pub mod timer;

pub use attendance::{
    classify, monthly_settlement, FineSchedule, Mark, MarkTally, MonthlySettlement, PageEntry,
    PageProgress, RankingRow, WeeklySummary,
};
pub use calendar::{month_grid, DayCell, MonthGrid, YearMonth};
pub use error::{
    ConfigError, CoreError, PreconditionError, StorageError, SyncError, ValidationError,
};
pub use events::Event;
pub use goals::{allocate, suggest_difficulty, DifficultyAdjustment, GoalAllocation, Suggestion};
pub use state::{AppState, Group, GroupSummary, Role, Subject, SubjectDraft, User};
pub use storage::{Config, Database, SnapshotStore};
pub use sync::SyncClient;
pub use timer::{format_hms, TimerState};
