pub mod migrate;
pub mod models;
pub mod repos;

pub use sqlx::Pool;
pub use sqlx::Postgres;
pub use sqlx::postgres::PgPool;

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Pool sizing shared by the API server and the migration CLI.
pub fn pool_options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(20)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
}

/// Open the RezGenie database pool at `database_url`.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options().connect(database_url).await?;
    tracing::debug!(
        max_connections = pool.options().get_max_connections(),
        "Database pool opened"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_keeps_a_warm_floor_below_its_cap() {
        let options = pool_options();
        assert_eq!(options.get_max_connections(), 20);
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(10));
    }
}
