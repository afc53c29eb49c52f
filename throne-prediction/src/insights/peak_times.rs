use throne_core::config::InsightConfig;
use throne_core::constants::HISTOGRAM_BUCKETS_PER_DAY;

use super::{significance, Insight, InsightType};
use crate::format::{format_bucket_range, join_labels};
use crate::histogram::{SessionCounts, TimeOfDayHistogram};

/// Circularly contiguous buckets that all clear the peak threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakRun {
    pub start: usize,
    pub len: usize,
    pub weight: f64,
    pub sessions: u32,
}

/// Group flagged buckets into runs. A run never splits across midnight.
pub fn peak_runs(
    histogram: &TimeOfDayHistogram,
    counts: &SessionCounts,
    threshold: f64,
) -> Vec<PeakRun> {
    let n = HISTOGRAM_BUCKETS_PER_DAY;
    let flagged: Vec<bool> = histogram.weights().iter().map(|w| *w > threshold).collect();

    let Some(anchor) = flagged.iter().position(|f| !f) else {
        return vec![PeakRun {
            start: 0,
            len: n,
            weight: histogram.total(),
            sessions: counts.total(),
        }];
    };

    let mut runs = Vec::new();
    let mut current: Option<PeakRun> = None;
    for step in 1..=n {
        let bucket = (anchor + step) % n;
        if flagged[bucket] {
            let run = current.get_or_insert(PeakRun {
                start: bucket,
                len: 0,
                weight: 0.0,
                sessions: 0,
            });
            run.len += 1;
            run.weight += histogram.weight(bucket);
            run.sessions += counts.bucket(bucket);
        } else if let Some(run) = current.take() {
            runs.push(run);
        }
    }
    runs
}

/// Whether a run holds more sessions than a uniform spread plausibly puts
/// into that many buckets anywhere in the day.
fn is_significant(run: &PeakRun, sessions: u32, config: &InsightConfig) -> bool {
    let p = run.len as f64 / HISTOGRAM_BUCKETS_PER_DAY as f64;
    significance::cluster_p_value(sessions, run.sessions, p) <= config.pattern_significance
}

/// Report the heaviest 1–2 peak runs, or nothing when no bucket stands out.
pub fn detect(
    histogram: &TimeOfDayHistogram,
    counts: &SessionCounts,
    config: &InsightConfig,
) -> Option<Insight> {
    let total = histogram.total();
    if total <= 0.0 || config.max_peaks == 0 {
        return None;
    }

    let sessions = counts.total();
    let threshold = histogram.mean() * config.peak_multiplier;
    let mut runs: Vec<PeakRun> = peak_runs(histogram, counts, threshold)
        .into_iter()
        .filter(|r| r.weight / total >= config.peak_min_share)
        .filter(|r| is_significant(r, sessions, config))
        .collect();
    if runs.is_empty() {
        return None;
    }
    runs.sort_by(|a, b| {
        b.weight
            .total_cmp(&a.weight)
            .then_with(|| a.start.cmp(&b.start))
    });
    runs.truncate(config.max_peaks);

    let ranges: Vec<String> = runs
        .iter()
        .map(|r| format_bucket_range(r.start, r.len))
        .collect();
    let message = if ranges.len() == 1 {
        format!("Your peak time is {}", ranges[0])
    } else {
        format!("Your peak times are {}", join_labels(&ranges))
    };
    Some(Insight::new(InsightType::PeakTimes, message))
}
