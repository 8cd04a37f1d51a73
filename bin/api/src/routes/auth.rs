//! # Auth — account profiles
//!
//! Routes:
//! - GET   /api/v1/auth/users/{id} — profile of one account
//! - PATCH /api/v1/auth/users/{id}/name — set or clear the display name

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{get, patch};
use axum::{Json, Router};
use rezgenie_storage::models::{USER_NAME_MAX_LEN, User};
use rezgenie_storage::repos;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{ApiError, ErrorBody, SharedState};

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/name", patch(update_user_name))
}

/// Public view of a [`User`]; never includes credentials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub is_active: bool,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateNameRequest {
    /// New display name; `null` or blank clears it.
    pub name: Option<String>,
}

impl UpdateNameRequest {
    /// Trimmed name, `None` when blank. Fails when longer than the column allows.
    fn normalized(&self) -> Result<Option<&str>, ApiError> {
        let name = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
        if let Some(n) = name {
            if n.chars().count() > USER_NAME_MAX_LEN {
                return Err(ApiError::Validation(format!(
                    "name must be at most {USER_NAME_MAX_LEN} characters"
                )));
            }
        }
        Ok(name)
    }
}

/// GET /api/v1/auth/users/{id}
#[utoipa::path(
    get,
    path = "/api/v1/auth/users/{id}",
    tag = "auth",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 404, description = "No such user", body = ErrorBody),
    )
)]
pub async fn get_user(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Path(id) = id?;
    let user = repos::get_user(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;
    Ok(Json(user.into()))
}

/// PATCH /api/v1/auth/users/{id}/name
#[utoipa::path(
    patch,
    path = "/api/v1/auth/users/{id}/name",
    tag = "auth",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateNameRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (status = 400, description = "Malformed body or id", body = ErrorBody),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 422, description = "Name too long", body = ErrorBody),
    )
)]
pub async fn update_user_name(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> Result<Json<UserProfile>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let name = body.normalized()?;
    let user = repos::update_user_name(&state.pool, id, name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {id} not found")))?;
    tracing::info!(user_id = id, cleared = name.is_none(), "User name updated");
    Ok(Json(user.into()))
}
