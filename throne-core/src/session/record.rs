use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A session row as handed over by the external session store.
///
/// `ended_at` is `None` while the session is still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionRecord {
    pub id: String,
    pub user_id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
    #[serde(default)]
    pub is_quick_log: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl SessionRecord {
    /// Whether the session has been closed.
    pub fn is_complete(&self) -> bool {
        self.ended_at.is_some()
    }
}
