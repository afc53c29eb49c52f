use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ThroneError, ThroneResult};

/// Thresholds for the pattern insight generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// No insights are produced below this many sessions.
    pub min_sessions: usize,
    /// A bucket is a peak when its weight exceeds `peak_multiplier × mean`.
    pub peak_multiplier: f64,
    /// Minimum share of the total weight a peak run must hold to be reported.
    pub peak_min_share: f64,
    /// Maximum number of peak ranges reported.
    pub max_peaks: usize,
    /// Circular standard deviation (minutes) below which sessions count as regular.
    pub regularity_threshold_minutes: f64,
    /// A weekday stands out when its share exceeds `weekday_multiplier / 7`.
    pub weekday_multiplier: f64,
    /// Largest chance, after correcting for every place a cluster could
    /// form, that a peak run or standout weekday holds as many sessions as
    /// it does when sessions are spread uniformly. `1.0` turns the check off.
    pub pattern_significance: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            min_sessions: defaults::DEFAULT_INSIGHT_MIN_SESSIONS,
            peak_multiplier: defaults::DEFAULT_PEAK_MULTIPLIER,
            peak_min_share: defaults::DEFAULT_PEAK_MIN_SHARE,
            max_peaks: defaults::DEFAULT_MAX_PEAKS,
            regularity_threshold_minutes: defaults::DEFAULT_REGULARITY_THRESHOLD_MINUTES,
            weekday_multiplier: defaults::DEFAULT_WEEKDAY_MULTIPLIER,
            pattern_significance: defaults::DEFAULT_PATTERN_SIGNIFICANCE,
        }
    }
}

impl InsightConfig {
    pub fn validate(&self) -> ThroneResult<()> {
        if !(self.peak_multiplier > 0.0 && self.peak_multiplier.is_finite()) {
            return Err(ThroneError::invalid(
                "insights.peak_multiplier",
                format!("must be positive, got {}", self.peak_multiplier),
            ));
        }
        if !(0.0..=1.0).contains(&self.peak_min_share) {
            return Err(ThroneError::invalid(
                "insights.peak_min_share",
                format!("must be in [0, 1], got {}", self.peak_min_share),
            ));
        }
        if !(self.regularity_threshold_minutes > 0.0) {
            return Err(ThroneError::invalid(
                "insights.regularity_threshold_minutes",
                format!("must be positive, got {}", self.regularity_threshold_minutes),
            ));
        }
        if !(self.weekday_multiplier > 0.0 && self.weekday_multiplier.is_finite()) {
            return Err(ThroneError::invalid(
                "insights.weekday_multiplier",
                format!("must be positive, got {}", self.weekday_multiplier),
            ));
        }
        if !(self.pattern_significance > 0.0 && self.pattern_significance <= 1.0) {
            return Err(ThroneError::invalid(
                "insights.pattern_significance",
                format!("must be in (0, 1], got {}", self.pattern_significance),
            ));
        }
        Ok(())
    }
}
