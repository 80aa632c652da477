pub mod models;
pub mod status_mapper;
pub mod status_response;
pub mod timezone;
pub mod units;
pub mod vehicle_state;
