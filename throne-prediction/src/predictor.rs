//! Next-session predictor.
//!
//! Scans forward from the current time-of-day bucket for the heaviest bucket
//! in the coming half day, scores how concentrated the history is around it,
//! and withholds the answer when evidence is thin or diffuse.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use throne_core::config::PredictionConfig;
use throne_core::constants::HISTOGRAM_BUCKETS_PER_DAY;
use throne_observability::events::{self, WithheldReason};
use ts_rs::TS;

use crate::histogram::circular;
use crate::model::PredictionModel;

/// Buckets in the forward-looking half day.
const FORWARD_WINDOW: usize = HISTOGRAM_BUCKETS_PER_DAY / 2;

/// A predicted next session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    /// Midpoint of the selected bucket on its next occurrence.
    pub predicted_time: DateTime<Utc>,
    /// Confidence in [0, 1].
    pub confidence: f64,
    /// Selected time-of-day bucket.
    pub bucket: usize,
}

/// Predict relative to the model's own `built_at`, with default thresholds.
pub fn predict_next_session(model: &PredictionModel) -> Option<Prediction> {
    predict_next_session_at(model, model.built_at())
}

/// Predict the next session after `now`, with default thresholds.
pub fn predict_next_session_at(model: &PredictionModel, now: DateTime<Utc>) -> Option<Prediction> {
    predict_with(model, now, &PredictionConfig::default())
}

/// Predict the next session after `now`.
///
/// Returns `None` when the model has fewer than
/// `min_sessions_for_prediction` sessions or when confidence falls below
/// `confidence_threshold`.
pub fn predict_with(
    model: &PredictionModel,
    now: DateTime<Utc>,
    config: &PredictionConfig,
) -> Option<Prediction> {
    let span = throne_observability::prediction_span!(model.total_sessions());
    let _guard = span.enter();

    if model.total_sessions() < config.min_sessions_for_prediction.max(1) {
        events::prediction_withheld(
            WithheldReason::InsufficientSessions,
            model.total_sessions(),
            0.0,
        );
        return None;
    }

    let local_now = now.with_timezone(&model.utc_offset());
    let start = circular::bucket_of(&local_now);
    let bucket = select_bucket(model, start, config);
    let confidence = confidence(model, bucket, config.confidence_window_radius);

    if confidence < config.confidence_threshold {
        events::prediction_withheld(
            WithheldReason::LowConfidence,
            model.total_sessions(),
            confidence,
        );
        return None;
    }

    let predicted_time = next_occurrence(bucket, now, model)?;
    events::prediction_made(bucket, confidence);

    Some(Prediction {
        predicted_time,
        confidence,
        bucket,
    })
}

/// Heaviest bucket in the forward half day from `start`, if it is
/// significant; otherwise the heaviest bucket of the full day. Ties go to the
/// bucket closest ahead of `start`.
///
/// A forward candidate is significant when it exceeds the mean weight by
/// `significance_margin` and its own confidence clears
/// `confidence_threshold`. A stray session later in the day is heavy
/// against a sparse mean but carries no confidence, so it never hides the
/// established daily peak.
pub fn select_bucket(model: &PredictionModel, start: usize, config: &PredictionConfig) -> usize {
    let histogram = model.histogram();
    let (bucket, weight) = histogram.max_forward(start, FORWARD_WINDOW);
    if weight > histogram.mean() * config.significance_margin
        && confidence(model, bucket, config.confidence_window_radius) >= config.confidence_threshold
    {
        return bucket;
    }
    histogram.max_forward(start, HISTOGRAM_BUCKETS_PER_DAY).0
}

/// Concentration of weight around `bucket`, rescaled against a flat day.
///
/// `share` is the fraction of total weight within `radius` buckets of
/// `bucket`; a uniform histogram has share `(2r+1)/96`. The result is
/// `(share − uniform) / (1 − uniform)` clamped to [0, 1]: 0 for a flat or
/// empty histogram, approaching 1 as all weight falls inside the window.
pub fn confidence(model: &PredictionModel, bucket: usize, radius: usize) -> f64 {
    if model.is_empty() {
        return 0.0;
    }
    let histogram = model.histogram();
    let total = histogram.total();
    if total <= 0.0 {
        return 0.0;
    }
    let radius = radius.min((HISTOGRAM_BUCKETS_PER_DAY - 1) / 2);
    let uniform = (2 * radius + 1) as f64 / HISTOGRAM_BUCKETS_PER_DAY as f64;
    let share = histogram.window_sum(bucket, radius) / total;
    ((share - uniform) / (1.0 - uniform)).clamp(0.0, 1.0)
}

/// The first instant strictly after `now` at the midpoint of `bucket`, in the
/// model's local time.
fn next_occurrence(
    bucket: usize,
    now: DateTime<Utc>,
    model: &PredictionModel,
) -> Option<DateTime<Utc>> {
    let offset = model.utc_offset();
    let local_now = now.with_timezone(&offset);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(
        circular::bucket_midpoint_seconds(bucket),
        0,
    )?;
    let today = offset
        .from_local_datetime(&local_now.date_naive().and_time(time))
        .single()?;
    let next = if today > local_now {
        today
    } else {
        today + Duration::days(1)
    };
    Some(next.with_timezone(&Utc))
}
