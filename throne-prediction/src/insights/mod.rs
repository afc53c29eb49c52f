//! Pattern insights derived from a model.
//!
//! | Insight | Condition |
//! |---------|-----------|
//! | `peak_times` | 1–2 contiguous runs of buckets above `peak_multiplier × mean` holding a meaningful share of the weight |
//! | `regularity` | circular standard deviation of session times below the threshold |
//! | `weekly_pattern` | 1–2 weekdays above `weekday_multiplier / 7` share |
//!
//! Peak runs and standout weekdays must also hold more sessions than a
//! uniform spread would plausibly produce (`pattern_significance`), so a few
//! scattered sessions never read as a habit.
//!
//! Output order is fixed and an insight is only emitted when its condition holds.

pub mod peak_times;
pub mod regularity;
pub mod significance;
pub mod weekly;

use serde::{Deserialize, Serialize};
use throne_core::config::InsightConfig;
use throne_observability::events;
use ts_rs::TS;

use crate::model::PredictionModel;

/// Kind of insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InsightType {
    PeakTimes,
    Regularity,
    WeeklyPattern,
}

/// A short qualitative observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub message: String,
}

impl Insight {
    pub(crate) fn new(insight_type: InsightType, message: String) -> Self {
        Self {
            insight_type,
            message,
        }
    }
}

/// Insights with default thresholds.
pub fn get_insights(model: &PredictionModel) -> Vec<Insight> {
    get_insights_with(model, &InsightConfig::default())
}

/// Insights in fixed order: peak times, regularity, weekly pattern.
pub fn get_insights_with(model: &PredictionModel, config: &InsightConfig) -> Vec<Insight> {
    let span = throne_observability::insights_span!(model.total_sessions());
    let _guard = span.enter();

    if model.total_sessions() < config.min_sessions.max(1) {
        events::insights_generated(0);
        return Vec::new();
    }

    let insights: Vec<Insight> = [
        peak_times::detect(model.histogram(), model.session_counts(), config),
        regularity::detect(model.circular(), config),
        weekly::detect(model.weekday_histogram(), model.session_counts(), config),
    ]
    .into_iter()
    .flatten()
    .collect();

    events::insights_generated(insights.len());
    insights
}
