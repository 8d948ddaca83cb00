use actix_web::{web, HttpResponse};

use sharito_infra::DatabasePool;
use sharito_shared::{HealthResponse, HealthStatus};

/// Handler for GET /health
///
/// 200 while the database answers, 503 otherwise.
pub async fn health_check(database: web::Data<DatabasePool>) -> HttpResponse {
    let status = match database.health_check().await {
        Ok(true) => HealthStatus::Healthy,
        Ok(false) | Err(_) => HealthStatus::Unhealthy,
    };

    let response = HealthResponse::new(status, env!("CARGO_PKG_VERSION"));
    if response.is_healthy() {
        HttpResponse::Ok().json(response)
    } else {
        tracing::warn!("Health check reports an unhealthy database");
        HttpResponse::ServiceUnavailable().json(response)
    }
}
