//! HTTP API for the academic records service.
//!
//! Runs the records use cases in-process behind an axum router under `/v1`.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod types;

use std::net::SocketAddr;

use tracing::info;

use records_service_lib::infra::Database;
use records_service_lib::service::Services;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP API as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GatewayConfig::from_env();
    config.server.host = host.to_string();
    config.server.port = port;

    run_server_with_config(config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.records.database).await?;
    let services = Services::from_connection(db.get_connection(), &config.records);

    let state = AppState::from_container(&services, Some(db));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("{} listening on {}", config.server.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
