use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::{PlannerError, Result};

/// Install the global subscriber. Logs go to stderr; stdout carries the plan.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            PlannerError::Telemetry(format!("invalid log filter '{}': {}", config.log_level, e))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| PlannerError::Telemetry(e.to_string()))
}
