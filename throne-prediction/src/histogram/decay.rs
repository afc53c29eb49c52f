use chrono::{DateTime, Utc};
use throne_core::constants::SECONDS_PER_DAY;

/// Age of an event in fractional days relative to `built_at`.
///
/// Events after `built_at` have age 0.
pub fn age_in_days(occurred_at: DateTime<Utc>, built_at: DateTime<Utc>) -> f64 {
    let millis = (built_at - occurred_at).num_milliseconds().max(0) as f64;
    millis / 1000.0 / SECONDS_PER_DAY
}

/// Recency weight: `lambda^ageInDays`.
///
/// Range: (0.0, 1.0] for `lambda` in (0, 1].
pub fn decay_weight(occurred_at: DateTime<Utc>, built_at: DateTime<Utc>, lambda: f64) -> f64 {
    lambda.powf(age_in_days(occurred_at, built_at))
}
