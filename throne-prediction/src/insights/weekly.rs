use throne_core::config::InsightConfig;
use throne_core::constants::DAYS_PER_WEEK;

use super::{significance, Insight, InsightType};
use crate::format::{join_labels, weekday_name};
use crate::histogram::{SessionCounts, WeekdayHistogram};

const MAX_REPORTED_DAYS: usize = 2;

/// Report the 1–2 weekdays carrying a disproportionate share of sessions.
///
/// A day also needs more sessions than a uniform spread over the week
/// plausibly gives any single day.
pub fn detect(
    weekdays: &WeekdayHistogram,
    counts: &SessionCounts,
    config: &InsightConfig,
) -> Option<Insight> {
    let threshold = config.weekday_multiplier / DAYS_PER_WEEK as f64;
    let sessions = counts.total();
    let one_day = 1.0 / DAYS_PER_WEEK as f64;
    let mut standouts: Vec<(usize, f64)> = (0..DAYS_PER_WEEK)
        .map(|d| (d, weekdays.share(d)))
        .filter(|(_, share)| *share > threshold)
        .filter(|(d, _)| {
            significance::cluster_p_value(sessions, counts.weekday(*d), one_day)
                <= config.pattern_significance
        })
        .collect();
    if standouts.is_empty() {
        return None;
    }
    standouts.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    standouts.truncate(MAX_REPORTED_DAYS);

    let days: Vec<String> = standouts
        .iter()
        .map(|(d, _)| weekday_name(*d).to_string())
        .collect();
    let message = format!("Most of your sessions happen on {}", join_labels(&days));
    Some(Insight::new(InsightType::WeeklyPattern, message))
}
