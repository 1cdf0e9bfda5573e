//! Academic records service library.
//!
//! Use cases for staff users, students, courses and enrollments, plus the
//! Postgres persistence behind them. Embedded by the gateway and driven by
//! the `academic-records` binary.

pub mod config;
pub mod dto;
pub mod infra;
pub mod messages;
pub mod repository;
pub mod seed;
pub mod service;

use tracing::info;

use domain::Argon2Hasher;

use crate::config::RecordsServiceConfig;
use crate::infra::Database;
use crate::repository::{RoleStore, UserStore};

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = RecordsServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Apply pending migrations and create the administrator if missing.
pub async fn run_seed() -> Result<(), Box<dyn std::error::Error>> {
    let config = RecordsServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

    let users = UserStore::new(db.get_connection());
    let roles = RoleStore::new(db.get_connection());

    let created = seed::seed_admin(&users, &roles, &Argon2Hasher, &config.admin).await?;
    if created {
        info!("Seeding finished");
    } else {
        info!("Nothing to seed");
    }

    Ok(())
}
