//! Human-readable times of day and weekday labels.

use throne_core::constants::{HISTOGRAM_BUCKETS_PER_DAY, MINUTES_PER_DAY};

use crate::histogram::circular::bucket_start_minutes;

const WEEKDAY_PLURALS: [&str; 7] = [
    "Mondays",
    "Tuesdays",
    "Wednesdays",
    "Thursdays",
    "Fridays",
    "Saturdays",
    "Sundays",
];

/// Render minutes since midnight as `h:mm AM/PM`. Wraps past midnight.
pub fn format_time_of_day(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let (hour, minute) = (minutes / 60, minutes % 60);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {suffix}")
}

/// Render `len` consecutive buckets starting at `start` as a time range.
pub fn format_bucket_range(start: usize, len: usize) -> String {
    let len = len.clamp(1, HISTOGRAM_BUCKETS_PER_DAY);
    let from = bucket_start_minutes(start);
    let to = bucket_start_minutes((start + len) % HISTOGRAM_BUCKETS_PER_DAY);
    format!("{} – {}", format_time_of_day(from), format_time_of_day(to))
}

/// Plural weekday label. Index 0 is Monday.
pub fn weekday_name(index: usize) -> &'static str {
    WEEKDAY_PLURALS[index % WEEKDAY_PLURALS.len()]
}

/// Join labels as "a", "a and b", or "a, b and c".
pub(crate) fn join_labels(labels: &[String]) -> String {
    match labels {
        [] => String::new(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
