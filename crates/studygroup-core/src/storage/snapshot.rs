//! Snapshot persistence: the whole [`AppState`] saved and loaded as one unit.

use std::cell::RefCell;

use tracing::{debug, warn};

use super::Database;
use crate::error::Result;
use crate::state::AppState;

/// Fixed key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "study_manager_v1";

/// Persistence collaborator.
///
/// `load` yields `None` when nothing usable was saved; `save` overwrites
/// the previous snapshot entirely.
pub trait SnapshotStore {
    fn load(&self) -> Result<Option<AppState>>;
    fn save(&self, state: &AppState) -> Result<()>;

    /// Saved snapshot, or a fresh state.
    fn load_or_default(&self) -> Result<AppState> {
        Ok(self.load()?.unwrap_or_default())
    }
}

fn decode(json: &str) -> Option<AppState> {
    match serde_json::from_str(json) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("ignoring unreadable snapshot: {e}");
            None
        }
    }
}

impl SnapshotStore for Database {
    fn load(&self) -> Result<Option<AppState>> {
        Ok(self.kv_get(SNAPSHOT_KEY)?.as_deref().and_then(decode))
    }

    fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.kv_set(SNAPSHOT_KEY, &json)?;
        debug!(bytes = json.len(), "snapshot saved");
        Ok(())
    }
}

/// Process-local store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    json: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw JSON, valid or not.
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            json: RefCell::new(Some(json.into())),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<AppState>> {
        Ok(self.json.borrow().as_deref().and_then(decode))
    }

    fn save(&self, state: &AppState) -> Result<()> {
        *self.json.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }
}
