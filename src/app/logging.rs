use tracing_subscriber::{EnvFilter, fmt};

use crate::app::AppError;

/// `RUST_LOG` wins over the configured fallback directive.
pub fn init(fallback_directive: &str) -> Result<(), AppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(fallback_directive).map_err(AppError::logging_init)?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(AppError::logging_init)
}
