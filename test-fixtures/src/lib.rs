//! Test fixtures for the Throne workspace: JSON session histories and
//! builders for timestamped events.

use std::path::PathBuf;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use throne_core::{SessionEvent, SessionRecord};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a session history from `sessions/<name>.json`.
pub fn load_sessions(name: &str) -> Vec<SessionRecord> {
    load_fixture(&format!("sessions/{name}.json"))
}

/// Day 0 of every synthetic history: Monday 2026-01-05, 00:00 UTC.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0)
        .single()
        .expect("valid epoch")
}

/// `day` days after the epoch at `hour:minute` UTC.
pub fn at(day: i64, hour: u32, minute: u32) -> DateTime<Utc> {
    epoch()
        + Duration::days(day)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute))
}

/// Completed events at explicit `(day, hour, minute)` triples.
pub fn events_at(times: &[(i64, u32, u32)]) -> Vec<SessionEvent> {
    times
        .iter()
        .map(|&(d, h, m)| SessionEvent::completed(at(d, h, m)))
        .collect()
}

/// One completed event per day for `days` consecutive days at `hour:minute`.
pub fn daily_at(days: i64, hour: u32, minute: u32) -> Vec<SessionEvent> {
    (0..days)
        .map(|d| SessionEvent::completed(at(d, hour, minute)))
        .collect()
}

/// `count` completed events spread evenly around the clock, one per day.
pub fn evenly_spread(count: i64) -> Vec<SessionEvent> {
    let step = 24 * 60 / count.max(1);
    (0..count)
        .map(|i| SessionEvent::completed(at(i, 0, 0) + Duration::minutes(i * step)))
        .collect()
}

/// A store record with a fresh id, closed after `duration_minutes` when given.
pub fn record(started_at: DateTime<Utc>, duration_minutes: Option<i64>) -> SessionRecord {
    SessionRecord {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: "fixture-user".to_string(),
        started_at,
        ended_at: duration_minutes.map(|m| started_at + Duration::minutes(m)),
        duration_seconds: duration_minutes.map(|m| m * 60),
        is_quick_log: false,
        notes: None,
        rating: None,
    }
}
