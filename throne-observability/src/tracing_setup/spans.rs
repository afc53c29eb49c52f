//! Span definitions per engine operation.

/// Create a model build span.
#[macro_export]
macro_rules! model_build_span {
    ($event_count:expr) => {
        tracing::debug_span!("throne.model_build", event_count = $event_count)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($total_sessions:expr) => {
        tracing::debug_span!("throne.prediction", total_sessions = $total_sessions)
    };
}

/// Create an insight generation span.
#[macro_export]
macro_rules! insights_span {
    ($total_sessions:expr) => {
        tracing::debug_span!("throne.insights", total_sessions = $total_sessions)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const MODEL_BUILD: &str = "throne.model_build";
    pub const PREDICTION: &str = "throne.prediction";
    pub const INSIGHTS: &str = "throne.insights";
}
