mod config;
mod error;
mod logging;
mod runtime;
pub mod services;
pub mod status_pipeline;

pub use error::AppError;

use runtime::SchemaMode;

/// Serves the status API and brings the schema up to date first.
pub fn run() -> Result<(), AppError> {
    bootstrap(SchemaMode::Migrate)
}

/// Serves the status API against a database that is already migrated.
pub fn run_api() -> Result<(), AppError> {
    bootstrap(SchemaMode::RequireCurrent)
}

fn bootstrap(mode: SchemaMode) -> Result<(), AppError> {
    let config = config::AppConfig::from_env()?;

    logging::init(&config.log_level)?;

    tracing::info!(
        db_path = %config.db_path,
        http_bind = %config.http_bind,
        http_workers = ?config.http_workers,
        display_timezone = %config.display_timezone,
        schema_mode = ?mode,
        "application bootstrap initialized"
    );

    runtime::run(config, mode)
}
