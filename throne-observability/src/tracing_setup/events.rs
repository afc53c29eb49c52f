//! Structured log events for engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed model build.
pub fn model_built(total_sessions: usize, skipped_incomplete: usize) {
    tracing::debug!(
        event = "model_built",
        total_sessions = total_sessions,
        skipped_incomplete = skipped_incomplete,
        "prediction model built"
    );
}

/// Log a prediction that cleared both gates.
pub fn prediction_made(bucket: usize, confidence: f64) {
    tracing::debug!(
        event = "prediction_made",
        bucket = bucket,
        confidence = confidence,
        "next session predicted"
    );
}

/// Reasons a prediction is withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithheldReason {
    InsufficientSessions,
    LowConfidence,
}

impl WithheldReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientSessions => "insufficient_sessions",
            Self::LowConfidence => "low_confidence",
        }
    }
}

/// Log a withheld prediction.
pub fn prediction_withheld(reason: WithheldReason, total_sessions: usize, confidence: f64) {
    tracing::debug!(
        event = "prediction_withheld",
        reason = reason.as_str(),
        total_sessions = total_sessions,
        confidence = confidence,
        "no prediction"
    );
}

/// Log the outcome of insight generation.
pub fn insights_generated(count: usize) {
    tracing::debug!(
        event = "insights_generated",
        count = count,
        "pattern insights generated"
    );
}

/// Log a model cache hit or miss.
pub fn model_cache_lookup(hit: bool) {
    tracing::trace!(event = "model_cache_lookup", hit = hit, "model cache lookup");
}
