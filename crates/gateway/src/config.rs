//! Gateway configuration.

use std::env;

use common::ServiceConfig;
use records_service_lib::config::RecordsServiceConfig;

/// Gateway configuration: where to listen plus the records service it embeds.
#[derive(Debug, Clone, Default)]
pub struct GatewayConfig {
    pub server: ServiceConfig,
    pub records: RecordsServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            server: ServiceConfig {
                service_name: defaults.service_name,
                host: env::var("SERVER_HOST").unwrap_or(defaults.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
            },
            records: RecordsServiceConfig::from_env(),
        }
    }
}
