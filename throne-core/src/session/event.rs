use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::SessionRecord;

/// A single timestamped occurrence fed into the model builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionEvent {
    pub occurred_at: DateTime<Utc>,
    pub completed: bool,
}

impl SessionEvent {
    /// A completed event at `occurred_at`.
    pub fn completed(occurred_at: DateTime<Utc>) -> Self {
        Self {
            occurred_at,
            completed: true,
        }
    }

    /// Convert a store record. The event time is the session start.
    pub fn from_record(record: &SessionRecord) -> Self {
        Self {
            occurred_at: record.started_at,
            completed: record.is_complete(),
        }
    }
}

impl From<&SessionRecord> for SessionEvent {
    fn from(record: &SessionRecord) -> Self {
        Self::from_record(record)
    }
}
