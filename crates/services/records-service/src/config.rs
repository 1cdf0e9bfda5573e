//! Records service configuration.

use std::env;
use std::fmt;

use common::{DatabaseConfig, TokenConfig};

/// Credentials of the administrator created by the seeder.
#[derive(Clone)]
pub struct AdminSeedConfig {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl Default for AdminSeedConfig {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "password123".to_string(),
            name: "Administrador".to_string(),
        }
    }
}

/// Records service configuration.
#[derive(Debug, Clone, Default)]
pub struct RecordsServiceConfig {
    pub database: DatabaseConfig,
    pub token: TokenConfig,
    pub admin: AdminSeedConfig,
}

impl RecordsServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(defaults.database.url),
                max_connections: parsed("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: defaults.database.min_connections,
            },
            token: TokenConfig {
                expiration_hours: parsed("TOKEN_EXPIRATION_HOURS")
                    .filter(|hours: &i64| *hours > 0)
                    .unwrap_or(defaults.token.expiration_hours),
            },
            admin: AdminSeedConfig {
                email: env::var("ADMIN_EMAIL").unwrap_or(defaults.admin.email),
                password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin.password),
                name: env::var("ADMIN_NAME").unwrap_or(defaults.admin.name),
            },
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
