use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length of `users.name`, matching its `VARCHAR(255)` column.
pub const USER_NAME_MAX_LEN: usize = 255;

// ─── User ───────────────────────────────────────────────────────────────────

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}
