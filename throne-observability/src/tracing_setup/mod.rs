//! Tracing setup — structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use throne_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted for log filtering.
pub const LOG_ENV_VAR: &str = "THRONE_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Respects `THRONE_LOG` (e.g. `THRONE_LOG=throne_prediction=debug`) and falls
/// back to `config.log_level` when it is unset or invalid.
///
/// Idempotent. If the host application already installed a global
/// subscriber, that one is kept.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json_logs);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}
