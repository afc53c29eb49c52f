/// Convenience alias used across the workspace.
pub type ThroneResult<T> = Result<T, ThroneError>;

/// Top-level error type.
///
/// The estimator itself never fails; absence of a prediction or insight is
/// expressed with `Option`. Errors only come from configuration surfaces.
#[derive(Debug, thiserror::Error)]
pub enum ThroneError {
    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("invalid configuration for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl ThroneError {
    pub(crate) fn invalid(field: &str, reason: String) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            reason,
        }
    }
}
