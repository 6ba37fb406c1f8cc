//! Integration tests for a full study day.
//!
//! Walks through login, group setup, subjects, goal generation, the timer
//! across snapshot reloads, attendance, and the calendar/summary views.

use chrono::NaiveDate;
use studygroup_core::attendance::{month_tally, AttendanceRecord};
use studygroup_core::storage::MemoryStore;
use studygroup_core::{
    format_hms, month_grid, AppState, Database, Event, Mark, PageProgress, SnapshotStore,
    SubjectDraft, WeeklySummary, YearMonth,
};

fn draft(name: &str, importance: &str, difficulty: &str) -> SubjectDraft {
    SubjectDraft {
        name: name.into(),
        total_pages: "240".into(),
        importance: importance.into(),
        difficulty: difficulty.into(),
        period_days: "12".into(),
    }
}

fn created_id(event: Event) -> String {
    match event {
        Event::GroupCreated { group_id, .. } => group_id,
        other => panic!("expected GroupCreated, got {other:?}"),
    }
}

#[test]
fn test_full_study_day_workflow() {
    let store = Database::open_memory().unwrap();
    let mut state = store.load_or_default().unwrap();

    state.login("owner@study.io", "Owner").unwrap();
    let gid = created_id(state.create_group("Algorithms").unwrap());
    state.enter_group(&gid).unwrap();
    state.add_subject(&draft("Graphs", "1", "1")).unwrap();
    state.add_subject(&draft("Dynamic Programming", "5", "5")).unwrap();
    store.save(&state).unwrap();

    // Goals: weights 2 and 10; 240 pages over 12 days = 20/day.
    let goals = state.generate_goals(60).unwrap();
    assert_eq!(goals.iter().map(|g| g.minutes).collect::<Vec<_>>(), [10, 50]);
    assert_eq!(goals.iter().map(|g| g.pages).collect::<Vec<_>>(), [3, 17]);

    // Timer started, snapshot reloaded later, no drift.
    state.timer_start(1_000_000).unwrap();
    store.save(&state).unwrap();
    let mut state = store.load().unwrap().unwrap();
    assert_eq!(format_hms(state.timer_elapsed(1_000_000 + 90_500).unwrap()), "00:01:30");
    state.timer_stop(1_000_000 + 25 * 60_000).unwrap();
    store.save(&state).unwrap();

    let state_after = store.load().unwrap().unwrap();
    assert_eq!(state_after.timer_elapsed(9_999_999_999).unwrap(), 25 * 60_000);

    // Attendance for two days.
    let mut state = state_after;
    let tue = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
    let wed = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
    state
        .save_attendance(tue, 60, 25, &PageProgress::parse("Graphs goal 3 / actual 4"))
        .unwrap();
    state
        .save_attendance(wed, 60, 65, &PageProgress::parse("goal 3 / actual 1"))
        .unwrap();
    store.save(&state).unwrap();

    let state = store.load().unwrap().unwrap();
    let record = state.attendance().unwrap();
    assert_eq!(record[&tue], Mark::Complete);
    assert_eq!(record[&wed], Mark::Partial);

    let grid = month_grid(YearMonth::of(wed), &record);
    assert_eq!(grid.leading_blanks, 4);
    assert_eq!(grid.days[12].mark, Some(Mark::Complete));
    assert_eq!(grid.days[13].mark, Some(Mark::Partial));

    let tally = month_tally(&record, 2026, 10);
    assert_eq!((tally.complete, tally.partial, tally.absent), (1, 1, 0));
    let week = WeeklySummary::for_week(&record, wed);
    assert_eq!(week.tally.total(), 2);
}

#[test]
fn test_members_keep_separate_subjects_and_attendance() {
    let store = MemoryStore::new();
    let mut state = AppState::new();
    state.login("owner@study.io", "Owner").unwrap();
    let gid = created_id(state.create_group("Physics").unwrap());
    state.enter_group(&gid).unwrap();
    state.add_subject(&draft("Optics", "3", "3")).unwrap();
    store.save(&state).unwrap();

    let mut state = store.load_or_default().unwrap();
    state.login("guest@study.io", "Guest").unwrap();
    state.join_group(&gid).unwrap();
    state.enter_group(&gid).unwrap();
    assert!(state.subjects().unwrap().is_empty());
    assert_eq!(state.attendance().unwrap(), AttendanceRecord::new());

    let members = state.members().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user.email, "owner@study.io");
    assert_eq!(members[1].user.email, "guest@study.io");
}

#[test]
fn test_invalid_input_never_reaches_the_store() {
    let store = MemoryStore::new();
    let mut state = AppState::new();
    state.login("owner@study.io", "Owner").unwrap();
    let gid = created_id(state.create_group("Chemistry").unwrap());
    state.enter_group(&gid).unwrap();
    store.save(&state).unwrap();

    let bad = SubjectDraft {
        importance: "very".into(),
        ..draft("Organic", "1", "1")
    };
    assert!(state.add_subject(&bad).is_err());
    assert!(state.generate_goals(30).is_err());
    assert_eq!(store.load().unwrap(), Some(state));
}
