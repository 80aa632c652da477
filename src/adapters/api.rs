use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::app::services::SqliteCarStatusService;
use crate::app::status_pipeline::{StatusError, StatusPipeline};
use crate::domain::vehicle_state::SystemClock;

pub const STATUS_ERROR_MESSAGE: &str = "Failed to retrieve car status";

#[derive(Clone)]
pub struct ApiState {
    pub status_pipeline: StatusPipeline<SqliteCarStatusService, SystemClock>,
}

#[derive(Debug, Serialize)]
struct SuccessEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize, PartialEq)]
struct ErrorEnvelope {
    error: &'static str,
    detail: String,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(get_car_status_endpoint);
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api/v1/cars/{car_id}/status")]
async fn get_car_status_endpoint(
    state: web::Data<ApiState>,
    path: web::Path<String>,
) -> impl Responder {
    let car_id = parse_car_id(&path);

    match state.status_pipeline.get_status(car_id) {
        Ok(status) => HttpResponse::Ok().json(SuccessEnvelope { data: status }),
        Err(error) => status_error_response(car_id, error),
    }
}

fn parse_car_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn status_error_response(car_id: i64, error: StatusError) -> HttpResponse {
    tracing::warn!(car_id, error = %error, "car status request failed");

    HttpResponse::InternalServerError().json(ErrorEnvelope {
        error: STATUS_ERROR_MESSAGE,
        detail: error.to_string(),
    })
}
