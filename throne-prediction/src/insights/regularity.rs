use throne_core::config::InsightConfig;

use super::{Insight, InsightType};
use crate::format::format_time_of_day;
use crate::histogram::CircularSummary;

/// Regular when the circular spread of session times is below the threshold.
pub fn detect(summary: &CircularSummary, config: &InsightConfig) -> Option<Insight> {
    let mean = summary.mean_minutes?;
    let spread = summary.std_dev_minutes()?;
    if spread >= config.regularity_threshold_minutes {
        return None;
    }
    let tolerance = match spread.round() as u32 {
        0 | 1 => "a minute".to_string(),
        m => format!("{m} minutes"),
    };
    let message = format!(
        "You're very regular: most sessions happen around {}, give or take {}",
        format_time_of_day(mean.round() as u32),
        tolerance
    );
    Some(Insight::new(InsightType::Regularity, message))
}
