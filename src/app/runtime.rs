use std::sync::{Arc, Mutex};

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use rusqlite::Connection;

use crate::adapters::api::{ApiState, configure_routes};
use crate::adapters::db::{self, LATEST_SCHEMA_VERSION};
use crate::app::config::AppConfig;
use crate::app::error::AppError;
use crate::app::services::SqliteCarStatusService;
use crate::app::status_pipeline::StatusPipeline;
use crate::domain::vehicle_state::SystemClock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    Migrate,
    RequireCurrent,
}

pub fn open_database(db_path: &str, mode: SchemaMode) -> Result<Connection, AppError> {
    let mut connection = db::open_connection(db_path).map_err(AppError::database_init)?;

    match mode {
        SchemaMode::Migrate => {
            db::run_migrations(&mut connection).map_err(AppError::database_init)?;
        }
        SchemaMode::RequireCurrent => {
            let version = db::schema_version(&connection).map_err(AppError::database_init)?;
            if version != LATEST_SCHEMA_VERSION {
                return Err(AppError::database_init(format!(
                    "schema version {version} does not match expected {LATEST_SCHEMA_VERSION}"
                )));
            }
        }
    }

    Ok(connection)
}

pub fn build_api_state(connection: Connection, config: &AppConfig) -> ApiState {
    let shared_connection = Arc::new(Mutex::new(connection));

    ApiState {
        status_pipeline: StatusPipeline::new(
            SqliteCarStatusService::new(shared_connection),
            SystemClock,
            config.display_timezone,
        ),
    }
}

pub fn run(config: AppConfig, mode: SchemaMode) -> Result<(), AppError> {
    let connection = open_database(&config.db_path, mode)?;
    let api_state = build_api_state(connection, &config);

    tracing::info!(bind = %config.http_bind, "http server starting");

    let http_bind = config.http_bind.clone();
    let http_workers = config.http_workers;

    actix_web::rt::System::new()
        .block_on(async move {
            let server = HttpServer::new(move || {
                let cors = Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET"])
                    .max_age(3600);

                App::new()
                    .wrap(cors)
                    .wrap(Logger::default())
                    .app_data(web::Data::new(api_state.clone()))
                    .configure(configure_routes)
            });

            let server = match http_workers {
                Some(workers) => server.workers(workers),
                None => server,
            };

            server.bind(&http_bind)?.run().await
        })
        .map_err(AppError::runtime)
}
