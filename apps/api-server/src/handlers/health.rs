//! Health check endpoint.

use actix_web::{HttpResponse, web};
use postboard_shared::HealthResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Health check endpoint - returns server status and pings storage.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.storage.ping().await.map_err(AppError::Unavailable)?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage.name().to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
