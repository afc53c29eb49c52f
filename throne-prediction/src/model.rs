use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::histogram::{CircularSummary, SessionCounts, TimeOfDayHistogram, WeekdayHistogram};

/// Immutable snapshot derived from a session history.
///
/// Holds no reference back to the events it was built from. All recency
/// decay is relative to `built_at`, so a model is replayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionModel {
    total_sessions: usize,
    #[ts(type = "Array<number>")]
    histogram: TimeOfDayHistogram,
    #[ts(type = "Array<number>")]
    weekday_histogram: WeekdayHistogram,
    #[ts(type = "{ buckets: Array<number>, weekdays: Array<number> }")]
    session_counts: SessionCounts,
    last_event_at: Option<DateTime<Utc>>,
    built_at: DateTime<Utc>,
    utc_offset_minutes: i32,
    circular: CircularSummary,
}

impl PredictionModel {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        total_sessions: usize,
        histogram: TimeOfDayHistogram,
        weekday_histogram: WeekdayHistogram,
        session_counts: SessionCounts,
        last_event_at: Option<DateTime<Utc>>,
        built_at: DateTime<Utc>,
        utc_offset: FixedOffset,
        circular: CircularSummary,
    ) -> Self {
        Self {
            total_sessions,
            histogram,
            weekday_histogram,
            session_counts,
            last_event_at,
            built_at,
            utc_offset_minutes: utc_offset.local_minus_utc() / 60,
            circular,
        }
    }

    /// Number of completed sessions folded into the model.
    pub fn total_sessions(&self) -> usize {
        self.total_sessions
    }

    pub fn histogram(&self) -> &TimeOfDayHistogram {
        &self.histogram
    }

    pub fn weekday_histogram(&self) -> &WeekdayHistogram {
        &self.weekday_histogram
    }

    /// Undecayed session counts behind the histograms.
    pub fn session_counts(&self) -> &SessionCounts {
        &self.session_counts
    }

    pub fn last_event_at(&self) -> Option<DateTime<Utc>> {
        self.last_event_at
    }

    /// Reference instant for decay.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    /// Local-time offset the buckets were computed in.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }

    pub fn circular(&self) -> &CircularSummary {
        &self.circular
    }

    pub fn is_empty(&self) -> bool {
        self.total_sessions == 0
    }
}
