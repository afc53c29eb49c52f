// Single source of truth for all default values.

// --- Prediction ---
pub const DEFAULT_DECAY_LAMBDA: f64 = 0.95;
pub const DEFAULT_MIN_SESSIONS_FOR_PREDICTION: usize = 5;
pub const DEFAULT_PREDICTION_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_PREDICTION_NOTIFICATION_LEAD_MINUTES: u32 = 10;
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;
pub const DEFAULT_SIGNIFICANCE_MARGIN: f64 = 1.5;
pub const DEFAULT_CONFIDENCE_WINDOW_RADIUS: usize = 2; // ±30 minutes

// --- Insights ---
pub const DEFAULT_INSIGHT_MIN_SESSIONS: usize = 5;
pub const DEFAULT_PEAK_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_PEAK_MIN_SHARE: f64 = 0.15;
pub const DEFAULT_MAX_PEAKS: usize = 2;
pub const DEFAULT_REGULARITY_THRESHOLD_MINUTES: f64 = 60.0;
pub const DEFAULT_WEEKDAY_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_PATTERN_SIGNIFICANCE: f64 = 0.01;

// --- Cache ---
pub const DEFAULT_MODEL_CACHE_TTL_SECS: u64 = 15 * 60; // one bucket
pub const DEFAULT_MODEL_CACHE_CAPACITY: u64 = 64;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

/// Largest accepted local-time offset (±18 hours).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;
