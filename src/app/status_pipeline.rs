use thiserror::Error;

use crate::app::services::{CarStatusQueryHandler, ServiceError};
use crate::domain::status_mapper::map_status;
use crate::domain::status_response::StatusResponse;
use crate::domain::timezone::DisplayTimezone;
use crate::domain::units::apply_unit_preferences;
use crate::domain::vehicle_state::{Clock, resolve_vehicle_state};

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("car with ID {0} does not exist")]
    NotFound(i64),
    #[error("no data available for car ID {0}")]
    NoData(i64),
    #[error("database error: {0}")]
    DataAccess(#[from] ServiceError),
}

#[derive(Clone)]
pub struct StatusPipeline<Q, C> {
    queries: Q,
    clock: C,
    timezone: DisplayTimezone,
}

impl<Q, C> StatusPipeline<Q, C>
where
    Q: CarStatusQueryHandler,
    C: Clock,
{
    pub fn new(queries: Q, clock: C, timezone: DisplayTimezone) -> Self {
        Self {
            queries,
            clock,
            timezone,
        }
    }

    pub fn get_status(&self, car_id: i64) -> Result<StatusResponse, StatusError> {
        if !self.queries.car_exists(car_id)? {
            return Err(StatusError::NotFound(car_id));
        }

        let record = self
            .queries
            .get_car_status(car_id)?
            .ok_or(StatusError::NoData(car_id))?;

        let now = self.clock.now();
        let state = resolve_vehicle_state(&record, now);
        let mut response = map_status(&record, &state, self.timezone, now);
        apply_unit_preferences(&mut response);

        tracing::debug!(
            car_id,
            state = %state,
            plugged_in = response.status.charging_details.plugged_in,
            is_charging_from_db = record.is_charging.unwrap_or(false),
            "car status resolved"
        );

        Ok(response)
    }
}
