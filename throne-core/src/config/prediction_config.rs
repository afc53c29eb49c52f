use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ThroneError, ThroneResult};

/// Model building and prediction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Per-day decay base. An event `d` days old contributes `decay_lambda^d`.
    pub decay_lambda: f64,
    /// Below this many sessions no prediction is made.
    pub min_sessions_for_prediction: usize,
    /// Predictions with lower confidence are withheld.
    pub confidence_threshold: f64,
    /// How long before a predicted session a reminder should fire.
    pub notification_lead_minutes: u32,
    /// Offset of the user's local time from UTC, in minutes.
    pub utc_offset_minutes: i32,
    /// During the forward scan a bucket must exceed the mean weight by this
    /// factor, and clear `confidence_threshold`, to be chosen over the
    /// full-day peak.
    pub significance_margin: f64,
    /// Buckets on each side of the selected bucket included in the confidence window.
    pub confidence_window_radius: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            decay_lambda: defaults::DEFAULT_DECAY_LAMBDA,
            min_sessions_for_prediction: defaults::DEFAULT_MIN_SESSIONS_FOR_PREDICTION,
            confidence_threshold: defaults::DEFAULT_PREDICTION_CONFIDENCE_THRESHOLD,
            notification_lead_minutes: defaults::DEFAULT_PREDICTION_NOTIFICATION_LEAD_MINUTES,
            utc_offset_minutes: defaults::DEFAULT_UTC_OFFSET_MINUTES,
            significance_margin: defaults::DEFAULT_SIGNIFICANCE_MARGIN,
            confidence_window_radius: defaults::DEFAULT_CONFIDENCE_WINDOW_RADIUS,
        }
    }
}

impl PredictionConfig {
    /// Reject values the estimator cannot work with.
    pub fn validate(&self) -> ThroneResult<()> {
        if !(self.decay_lambda > 0.0 && self.decay_lambda <= 1.0) {
            return Err(ThroneError::invalid(
                "prediction.decay_lambda",
                format!("must be in (0, 1], got {}", self.decay_lambda),
            ));
        }
        if self.min_sessions_for_prediction == 0 {
            return Err(ThroneError::invalid(
                "prediction.min_sessions_for_prediction",
                "must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(ThroneError::invalid(
                "prediction.confidence_threshold",
                format!("must be in [0, 1], got {}", self.confidence_threshold),
            ));
        }
        if self.utc_offset_minutes.abs() > defaults::MAX_UTC_OFFSET_MINUTES {
            return Err(ThroneError::invalid(
                "prediction.utc_offset_minutes",
                format!(
                    "must be within ±{} minutes, got {}",
                    defaults::MAX_UTC_OFFSET_MINUTES,
                    self.utc_offset_minutes
                ),
            ));
        }
        if !(self.significance_margin >= 1.0 && self.significance_margin.is_finite()) {
            return Err(ThroneError::invalid(
                "prediction.significance_margin",
                format!("must be a finite value >= 1, got {}", self.significance_margin),
            ));
        }
        if self.confidence_window_radius >= crate::constants::HISTOGRAM_BUCKETS_PER_DAY / 2 {
            return Err(ThroneError::invalid(
                "prediction.confidence_window_radius",
                format!(
                    "must be smaller than half a day of buckets, got {}",
                    self.confidence_window_radius
                ),
            ));
        }
        Ok(())
    }

    /// The user's local-time offset.
    ///
    /// Out-of-range offsets fall back to UTC; `validate` reports them.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

