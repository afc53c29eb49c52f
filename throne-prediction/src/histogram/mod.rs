//! Decayed time-of-day and day-of-week histograms.
//!
//! 96 buckets of 15 minutes cover one day. Each event adds its decay weight
//! to one bucket; a small per-session floor keeps every bucket strictly
//! positive once any session has been recorded.

pub mod circular;
pub mod decay;

use serde::{Deserialize, Serialize};
use throne_core::constants::{DAYS_PER_WEEK, HISTOGRAM_BUCKETS_PER_DAY};

pub use circular::{circular_distance, forward_distance, CircularSummary};

/// Fixed 96-bucket circular histogram of accumulated weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TimeOfDayHistogram {
    buckets: Vec<f64>,
}

impl TimeOfDayHistogram {
    /// All-zero histogram.
    pub fn new() -> Self {
        Self {
            buckets: vec![0.0; HISTOGRAM_BUCKETS_PER_DAY],
        }
    }

    pub(crate) fn add(&mut self, bucket: usize, weight: f64) {
        self.buckets[bucket % HISTOGRAM_BUCKETS_PER_DAY] += weight;
    }

    /// Add `epsilon` to every bucket.
    pub(crate) fn apply_floor(&mut self, epsilon: f64) {
        if epsilon > 0.0 {
            self.buckets.iter_mut().for_each(|w| *w += epsilon);
        }
    }

    pub fn weight(&self, bucket: usize) -> f64 {
        self.buckets[bucket % HISTOGRAM_BUCKETS_PER_DAY]
    }

    pub fn weights(&self) -> &[f64] {
        &self.buckets
    }

    pub fn total(&self) -> f64 {
        self.buckets.iter().sum()
    }

    pub fn mean(&self) -> f64 {
        self.total() / HISTOGRAM_BUCKETS_PER_DAY as f64
    }

    /// Sum of weights within `radius` buckets either side of `center`, wrapping.
    pub fn window_sum(&self, center: usize, radius: usize) -> f64 {
        let r = radius.min((HISTOGRAM_BUCKETS_PER_DAY - 1) / 2);
        self.buckets
            .iter()
            .enumerate()
            .filter(|(bucket, _)| circular::circular_distance(center, *bucket) <= r)
            .map(|(_, w)| w)
            .sum()
    }

    /// Bucket with the highest weight among the `len` buckets starting at
    /// `start` and moving forward. Ties go to the smallest forward distance.
    pub fn max_forward(&self, start: usize, len: usize) -> (usize, f64) {
        let len = len.clamp(1, HISTOGRAM_BUCKETS_PER_DAY);
        let mut best: Option<(usize, usize, f64)> = None;
        for (bucket, &w) in self.buckets.iter().enumerate() {
            let ahead = circular::forward_distance(start, bucket);
            if ahead >= len {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_ahead, _, best_w)) => w > best_w || (w == best_w && ahead < best_ahead),
            };
            if better {
                best = Some((ahead, bucket, w));
            }
        }
        best.map_or((start % HISTOGRAM_BUCKETS_PER_DAY, 0.0), |(_, bucket, w)| (bucket, w))
    }
}

impl Default for TimeOfDayHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<f64>> for TimeOfDayHistogram {
    type Error = String;

    fn try_from(buckets: Vec<f64>) -> Result<Self, Self::Error> {
        if buckets.len() != HISTOGRAM_BUCKETS_PER_DAY {
            return Err(format!(
                "histogram must have {} buckets, got {}",
                HISTOGRAM_BUCKETS_PER_DAY,
                buckets.len()
            ));
        }
        if let Some(bad) = buckets.iter().find(|w| !(w.is_finite() && **w >= 0.0)) {
            return Err(format!("histogram weights must be finite and >= 0, got {bad}"));
        }
        Ok(Self { buckets })
    }
}

impl From<TimeOfDayHistogram> for Vec<f64> {
    fn from(h: TimeOfDayHistogram) -> Self {
        h.buckets
    }
}

/// Undecayed number of sessions per bucket and per weekday.
///
/// Decay decides how much a session matters; these counts decide how much
/// evidence a pattern rests on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSessionCounts", into = "RawSessionCounts")]
pub struct SessionCounts {
    buckets: Vec<u32>,
    weekdays: [u32; DAYS_PER_WEEK],
}

#[derive(Serialize, Deserialize)]
struct RawSessionCounts {
    buckets: Vec<u32>,
    weekdays: [u32; DAYS_PER_WEEK],
}

impl SessionCounts {
    pub fn new() -> Self {
        Self {
            buckets: vec![0; HISTOGRAM_BUCKETS_PER_DAY],
            weekdays: [0; DAYS_PER_WEEK],
        }
    }

    pub(crate) fn add(&mut self, bucket: usize, weekday: usize) {
        self.buckets[bucket % HISTOGRAM_BUCKETS_PER_DAY] += 1;
        self.weekdays[weekday % DAYS_PER_WEEK] += 1;
    }

    pub fn bucket(&self, bucket: usize) -> u32 {
        self.buckets[bucket % HISTOGRAM_BUCKETS_PER_DAY]
    }

    pub fn weekday(&self, weekday: usize) -> u32 {
        self.weekdays[weekday % DAYS_PER_WEEK]
    }

    pub fn total(&self) -> u32 {
        self.buckets.iter().sum()
    }
}

impl Default for SessionCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<RawSessionCounts> for SessionCounts {
    type Error = String;

    fn try_from(raw: RawSessionCounts) -> Result<Self, Self::Error> {
        if raw.buckets.len() != HISTOGRAM_BUCKETS_PER_DAY {
            return Err(format!(
                "session counts must have {} buckets, got {}",
                HISTOGRAM_BUCKETS_PER_DAY,
                raw.buckets.len()
            ));
        }
        let by_bucket: u32 = raw.buckets.iter().sum();
        let by_weekday: u32 = raw.weekdays.iter().sum();
        if by_bucket != by_weekday {
            return Err(format!(
                "session counts disagree: {by_bucket} by bucket, {by_weekday} by weekday"
            ));
        }
        Ok(Self {
            buckets: raw.buckets,
            weekdays: raw.weekdays,
        })
    }
}

impl From<SessionCounts> for RawSessionCounts {
    fn from(counts: SessionCounts) -> Self {
        Self {
            buckets: counts.buckets,
            weekdays: counts.weekdays,
        }
    }
}

/// Decayed weight per weekday. Index 0 is Monday.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayHistogram([f64; DAYS_PER_WEEK]);

impl WeekdayHistogram {
    pub(crate) fn add(&mut self, weekday: usize, weight: f64) {
        self.0[weekday % DAYS_PER_WEEK] += weight;
    }

    pub fn weight(&self, weekday: usize) -> f64 {
        self.0[weekday % DAYS_PER_WEEK]
    }

    pub fn weights(&self) -> &[f64; DAYS_PER_WEEK] {
        &self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Fraction of the total weight falling on `weekday`; 0 when empty.
    pub fn share(&self, weekday: usize) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.weight(weekday) / total
        } else {
            0.0
        }
    }
}
