//! Circular time-of-day arithmetic.
//!
//! The day is a ring: bucket 95 (23:45) and bucket 0 (00:00) are neighbours.

use std::f64::consts::TAU;

use chrono::{DateTime, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};
use throne_core::constants::{
    HISTOGRAM_BUCKETS_PER_DAY, HISTOGRAM_BUCKET_SIZE_MINUTES, MINUTES_PER_DAY,
};
use ts_rs::TS;

const BUCKET_SECONDS: u32 = HISTOGRAM_BUCKET_SIZE_MINUTES * 60;

/// Fractional minutes since local midnight.
pub fn minutes_since_midnight(local: &DateTime<FixedOffset>) -> f64 {
    local.num_seconds_from_midnight() as f64 / 60.0
}

/// Bucket index for a local timestamp: `floor(minutesSinceMidnight / 15)`.
pub fn bucket_of(local: &DateTime<FixedOffset>) -> usize {
    let bucket = (local.num_seconds_from_midnight() / BUCKET_SECONDS) as usize;
    bucket.min(HISTOGRAM_BUCKETS_PER_DAY - 1)
}

/// `min(|i−j|, 96−|i−j|)`.
pub fn circular_distance(i: usize, j: usize) -> usize {
    let d = i.abs_diff(j) % HISTOGRAM_BUCKETS_PER_DAY;
    d.min(HISTOGRAM_BUCKETS_PER_DAY - d)
}

/// Buckets to step forward from `from` to reach `to`, wrapping at midnight.
pub fn forward_distance(from: usize, to: usize) -> usize {
    (to + HISTOGRAM_BUCKETS_PER_DAY - from % HISTOGRAM_BUCKETS_PER_DAY) % HISTOGRAM_BUCKETS_PER_DAY
}

/// First minute of a bucket.
pub fn bucket_start_minutes(bucket: usize) -> u32 {
    (bucket % HISTOGRAM_BUCKETS_PER_DAY) as u32 * HISTOGRAM_BUCKET_SIZE_MINUTES
}

/// Midpoint of a bucket in seconds since midnight.
pub fn bucket_midpoint_seconds(bucket: usize) -> u32 {
    bucket_start_minutes(bucket) * 60 + BUCKET_SECONDS / 2
}

/// Decay-weighted circular statistics over exact event times-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CircularSummary {
    /// Circular mean time-of-day in minutes, `None` when undefined
    /// (no events, or directions cancel out).
    pub mean_minutes: Option<f64>,
    /// Mean resultant length `R` in [0, 1]. 1 means every event at the same time.
    pub resultant_length: f64,
}

impl CircularSummary {
    /// Circular standard deviation `sqrt(-2 ln R)` expressed in minutes.
    ///
    /// `None` when `R` is zero (uniform spread).
    pub fn std_dev_minutes(&self) -> Option<f64> {
        if self.resultant_length <= 0.0 {
            return None;
        }
        let radians = (-2.0 * self.resultant_length.ln()).max(0.0).sqrt();
        Some(radians * MINUTES_PER_DAY as f64 / TAU)
    }
}

/// Running sums for `CircularSummary`.
#[derive(Debug, Default)]
pub(crate) struct CircularAccumulator {
    weight: f64,
    cos: f64,
    sin: f64,
}

/// Below this `R` the mean direction is numerically meaningless.
const MIN_RESULTANT: f64 = 1e-9;

impl CircularAccumulator {
    pub(crate) fn add(&mut self, minutes: f64, weight: f64) {
        let angle = minutes / MINUTES_PER_DAY as f64 * TAU;
        self.weight += weight;
        self.cos += weight * angle.cos();
        self.sin += weight * angle.sin();
    }

    pub(crate) fn finish(&self) -> CircularSummary {
        if self.weight <= 0.0 {
            return CircularSummary::default();
        }
        let r = (self.cos.hypot(self.sin) / self.weight).clamp(0.0, 1.0);
        let mean_minutes = (r > MIN_RESULTANT).then(|| {
            let angle = self.sin.atan2(self.cos);
            (angle / TAU * MINUTES_PER_DAY as f64).rem_euclid(MINUTES_PER_DAY as f64)
        });
        CircularSummary {
            mean_minutes,
            resultant_length: r,
        }
    }
}
