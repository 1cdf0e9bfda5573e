//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use records_service_lib::infra::DbErr;
use serde::Serialize;
use tracing::error;

use crate::state::AppState;

const DATABASE_UNREACHABLE: &str = "Database unreachable";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub services: ServiceStatus,
}

/// Individual dependency status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub database: ServiceHealth,
}

/// Dependency health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    fn with_status(status: &str, error: Option<String>) -> Self {
        Self {
            status: status.to_string(),
            error,
        }
    }
}

/// Ping outcome as reported to clients. Driver errors are logged, not echoed.
fn database_health(ping: Result<(), DbErr>) -> (ServiceHealth, bool) {
    match ping {
        Ok(()) => (ServiceHealth::with_status("healthy", None), true),
        Err(e) => {
            error!("Database health check failed: {:?}", e);
            (
                ServiceHealth::with_status("unhealthy", Some(DATABASE_UNREACHABLE.to_string())),
                false,
            )
        }
    }
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - pings Postgres when one is attached.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (database, all_healthy) = match &state.database {
        Some(db) => database_health(db.ping().await),
        None => (ServiceHealth::with_status("not configured", None), true),
    };

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        services: ServiceStatus { database },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_ping_hides_driver_error() {
        let (health, healthy) = database_health(Err(DbErr::Custom(
            "password authentication failed for user \"postgres\" at 10.0.0.3".into(),
        )));

        assert!(!healthy);
        assert_eq!(health.status, "unhealthy");
        assert_eq!(health.error.as_deref(), Some(DATABASE_UNREACHABLE));

        let body = serde_json::to_string(&health).unwrap();
        assert!(!body.contains("postgres"));
    }

    #[test]
    fn test_successful_ping_is_healthy() {
        let (health, healthy) = database_health(Ok(()));
        assert!(healthy);
        assert_eq!(health.error, None);
    }
}
