//! Schema bootstrap
//!
//! Applies the SQL files under `migrations/` in order. Every statement is
//! idempotent, so this runs on each startup.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::DomainError;

const MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_create_contacts",
        include_str!("../../../migrations/0001_create_contacts.sql"),
    ),
    (
        "0002_create_news_releases",
        include_str!("../../../migrations/0002_create_news_releases.sql"),
    ),
];

/// Apply all migrations
pub async fn apply_migrations(db: &DatabaseConnection) -> Result<(), DomainError> {
    for (name, sql) in MIGRATIONS {
        tracing::debug!(migration = name, "Applying migration");
        db.execute_unprepared(sql)
            .await
            .map_err(|e| DomainError::Database(format!("migration {} failed: {}", name, e)))?;
    }
    tracing::info!(count = MIGRATIONS.len(), "Schema up to date");
    Ok(())
}
