use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::app_state::AppState;

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[get("/health/live")]
pub async fn health_live() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "alive" }))
}

/// Readiness includes a database round trip, so a lost MongoDB connection
/// takes the instance out of rotation.
#[get("/health/ready")]
pub async fn health_ready(state: web::Data<AppState>) -> HttpResponse {
    match state.db.health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ready",
            "database": "connected",
        })),
        Err(e) => {
            log::error!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "not ready",
                "database": "unreachable",
            }))
        }
    }
}
