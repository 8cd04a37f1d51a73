//! Reversible schema migrations embedded from `migrations/`.

use sqlx::PgPool;
use sqlx::migrate::{Migrate, MigrateError, Migrator};

/// All migrations, embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Revert every applied migration newer than `target` (0 reverts everything).
pub async fn revert_to(pool: &PgPool, target: i64) -> Result<(), MigrateError> {
    MIGRATOR.undo(pool, target).await?;
    tracing::info!(target_version = target, "Database migrations reverted");
    Ok(())
}

/// Revert the newest applied migration. Returns the reverted version, if any.
pub async fn revert_last(pool: &PgPool) -> Result<Option<i64>, MigrateError> {
    let applied = applied_versions(pool).await?;
    let Some((&newest, rest)) = applied.split_last() else {
        tracing::info!("No applied migrations to revert");
        return Ok(None);
    };
    let target = rest.last().copied().unwrap_or(0);
    revert_to(pool, target).await?;
    Ok(Some(newest))
}

/// Versions currently applied to the database, oldest first.
pub async fn applied_versions(pool: &PgPool) -> Result<Vec<i64>, MigrateError> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let mut versions: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();
    versions.sort_unstable();
    Ok(versions)
}

/// Versions embedded in the binary, oldest first, with their descriptions.
pub fn known_migrations() -> Vec<(i64, String)> {
    MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| (m.version, m.description.to_string()))
        .collect()
}
