pub mod attend;
pub mod calendar;
pub mod config;
pub mod difficulty;
pub mod goal;
pub mod group;
pub mod subject;
pub mod summary;
pub mod timer;
pub mod user;

use serde::Serialize;
use studygroup_core::{AppState, Database, SnapshotStore};

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Load the snapshot, apply `f`, and save only if `f` succeeded.
pub fn with_state<T>(f: impl FnOnce(&mut AppState) -> CliResult<T>) -> CliResult<T> {
    let db = Database::open()?;
    let mut state = db.load_or_default()?;
    let out = f(&mut state)?;
    db.save(&state)?;
    Ok(out)
}

/// Load the snapshot for a read-only command.
pub fn read_state() -> CliResult<AppState> {
    let db = Database::open()?;
    Ok(db.load_or_default()?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Local calendar date, or the `--date` override.
pub fn resolve_date(date: Option<&str>) -> CliResult<chrono::NaiveDate> {
    match date {
        Some(raw) => Ok(chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{raw}' (expected YYYY-MM-DD): {e}"))?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
