use sqlx::PgPool;

use crate::models::User;

// ─── User Queries ───────────────────────────────────────────────────────────

/// Get a single user by id.
pub async fn get_user(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Set (or clear, with `None`) a user's display name.
/// Returns the updated row, or `None` if no such user exists.
pub async fn update_user_name(
    pool: &PgPool,
    id: i64,
    name: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("UPDATE users SET name = $1 WHERE id = $2 RETURNING *")
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
}
