/// Throne engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of one time-of-day histogram bucket.
pub const HISTOGRAM_BUCKET_SIZE_MINUTES: u32 = 15;

/// Buckets covering one day (24 * 60 / 15).
pub const HISTOGRAM_BUCKETS_PER_DAY: usize = 96;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Seconds in a day, used to convert event age into fractional days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a week. Weekday index 0 is Monday.
pub const DAYS_PER_WEEK: usize = 7;

/// Per-session smoothing floor added to every bucket before normalization.
pub const SMOOTHING_EPSILON_PER_SESSION: f64 = 1e-6;

const _: () = assert!(
    HISTOGRAM_BUCKETS_PER_DAY == (MINUTES_PER_DAY / HISTOGRAM_BUCKET_SIZE_MINUTES) as usize
);
