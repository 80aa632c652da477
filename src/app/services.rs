use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use thiserror::Error;

use crate::adapters::db;
use crate::adapters::db::DbError;
use crate::domain::models::RawStatusRecord;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database lock poisoned")]
    DbLockPoisoned,
    #[error("database operation failed: {0}")]
    Database(#[from] DbError),
}

pub trait CarStatusQueryHandler {
    fn car_exists(&self, car_id: i64) -> Result<bool, ServiceError>;
    fn get_car_status(&self, car_id: i64) -> Result<Option<RawStatusRecord>, ServiceError>;
}

#[derive(Clone)]
pub struct SqliteCarStatusService {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteCarStatusService {
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn with_connection<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, DbError>,
    ) -> Result<T, ServiceError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| ServiceError::DbLockPoisoned)?;
        op(&connection).map_err(ServiceError::from)
    }
}

impl CarStatusQueryHandler for SqliteCarStatusService {
    fn car_exists(&self, car_id: i64) -> Result<bool, ServiceError> {
        self.with_connection(|connection| db::car_exists(connection, car_id))
    }

    fn get_car_status(&self, car_id: i64) -> Result<Option<RawStatusRecord>, ServiceError> {
        self.with_connection(|connection| db::get_car_status(connection, car_id))
    }
}
