mod config;
pub mod database;
mod snapshot;

pub use config::{Config, GoalsConfig, LogConfig, SyncConfig, TimerConfig};
pub use database::Database;
pub use snapshot::{MemoryStore, SnapshotStore, SNAPSHOT_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `STUDYGROUP_DATA_DIR` wins when set. Otherwise `~/.config/studygroup`,
/// or `~/.config/studygroup-dev` with `STUDYGROUP_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("STUDYGROUP_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYGROUP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studygroup-dev")
            } else {
                base_dir.join("studygroup")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
