//! Model builder: events → `PredictionModel`.

use chrono::{DateTime, Datelike, Utc};
use throne_core::config::PredictionConfig;
use throne_core::constants::SMOOTHING_EPSILON_PER_SESSION;
use throne_core::SessionEvent;
use throne_observability::events;

use crate::histogram::circular::{self, CircularAccumulator};
use crate::histogram::{decay, SessionCounts, TimeOfDayHistogram, WeekdayHistogram};
use crate::model::PredictionModel;

/// Build a model with default configuration.
pub fn build_model(events: &[SessionEvent], now: DateTime<Utc>) -> PredictionModel {
    build_model_with(events, now, &PredictionConfig::default())
}

/// Build a model from the full event history, using `now` as `built_at`.
///
/// Only completed events participate. Events are folded in ascending
/// timestamp order so the floating-point sums do not depend on input order.
/// `config` is assumed valid (see `PredictionConfig::validate`).
pub fn build_model_with(
    events: &[SessionEvent],
    now: DateTime<Utc>,
    config: &PredictionConfig,
) -> PredictionModel {
    let span = throne_observability::model_build_span!(events.len());
    let _guard = span.enter();

    let mut timestamps: Vec<DateTime<Utc>> = events
        .iter()
        .filter(|e| e.completed)
        .map(|e| e.occurred_at)
        .collect();
    let skipped = events.len() - timestamps.len();
    timestamps.sort_unstable();

    let offset = config.utc_offset();
    let mut histogram = TimeOfDayHistogram::new();
    let mut weekdays = WeekdayHistogram::default();
    let mut counts = SessionCounts::new();
    let mut moments = CircularAccumulator::default();

    for at in &timestamps {
        let weight = decay::decay_weight(*at, now, config.decay_lambda);
        let local = at.with_timezone(&offset);
        let bucket = circular::bucket_of(&local);
        let weekday = local.weekday().num_days_from_monday() as usize;
        histogram.add(bucket, weight);
        weekdays.add(weekday, weight);
        counts.add(bucket, weekday);
        moments.add(circular::minutes_since_midnight(&local), weight);
    }

    let total_sessions = timestamps.len();
    histogram.apply_floor(SMOOTHING_EPSILON_PER_SESSION * total_sessions as f64);

    events::model_built(total_sessions, skipped);

    PredictionModel::new(
        total_sessions,
        histogram,
        weekdays,
        counts,
        timestamps.last().copied(),
        now,
        offset,
        moments.finish(),
    )
}
