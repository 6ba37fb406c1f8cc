//! Best-effort remote sync of created subjects.
//!
//! Local state is authoritative: callers log a failed sync and move on,
//! they never roll the local change back.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::SyncError;
use crate::state::Subject;
use crate::storage::SyncConfig;

/// Body posted to `{base_url}/subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPayload {
    pub group_id: String,
    pub name: String,
    pub total_pages: u32,
    pub importance: u32,
    pub difficulty: u32,
    pub period_days: u32,
}

impl SubjectPayload {
    pub fn new(group_id: &str, subject: &Subject) -> Self {
        Self {
            group_id: group_id.to_string(),
            name: subject.name.clone(),
            total_pages: subject.total_pages,
            importance: subject.importance,
            difficulty: subject.difficulty,
            period_days: subject.period_days,
        }
    }
}

pub struct SyncClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SyncClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SyncError> {
        let mut base_url = Url::parse(base_url).map_err(|e| SyncError::InvalidUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;
        // Keep any path prefix when joining endpoint names.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &SyncConfig) -> Result<Self, SyncError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self, name: &str) -> Result<Url, SyncError> {
        self.base_url.join(name).map_err(|e| SyncError::InvalidUrl {
            url: format!("{}{name}", self.base_url),
            message: e.to_string(),
        })
    }

    /// POST the subject. Returns the server's JSON reply (`Null` if empty).
    pub async fn create_subject(
        &self,
        group_id: &str,
        subject: &Subject,
    ) -> Result<serde_json::Value, SyncError> {
        let url = self.endpoint("subjects")?;
        let payload = SubjectPayload::new(group_id, subject);
        debug!(%url, subject = %payload.name, "syncing subject");

        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SyncError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body).unwrap_or(serde_json::Value::Null))
    }
}
