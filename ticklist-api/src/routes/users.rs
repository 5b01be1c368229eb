/// User endpoints
///
/// # Endpoints
///
/// - `POST   /api/users/add` - register a new user
/// - `GET    /api/users/all` - all users
/// - `GET    /api/users/:id` - user by id
/// - `GET    /api/users/username/:username` - user by username
/// - `GET    /api/users/email/:email` - user by email
/// - `PUT    /api/users/update` - overwrite a user record
/// - `DELETE /api/users/delete` - delete a user

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{app::AppState, error::ApiResult};
use ticklist_shared::models::user::User;
use ticklist_shared::service::user::{RegisterUser, UpdateUser};

/// Delete payload; only the username is consulted
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    /// Username of the account to delete
    pub username: String,
}

/// `POST /api/users/add` - registers a new user
///
/// The submitted plaintext password is hashed before persisting; the
/// returned record carries the hash. 409 when the username or email is
/// taken, 400 on blank or malformed input.
pub async fn add_user(
    State(state): State<AppState>,
    Json(req): Json<RegisterUser>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state.users.add_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /api/users/all` - lists every user (empty array when none)
pub async fn all_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.users.all_users().await?))
}

/// `GET /api/users/:id` - user by id, 404 when absent
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.user_by_id(id).await?))
}

/// `GET /api/users/username/:username` - user by username
pub async fn user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.user_by_username(&username).await?))
}

/// `GET /api/users/email/:email` - user by email address
///
/// 400 when the email is blank or malformed, 404 when no user has it.
pub async fn user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.users.user_by_email(&email).await?))
}

/// `PUT /api/users/update` - overwrites a user record, keyed by username
///
/// The record is stored as-is; the caller supplies the password hash.
pub async fn update_user(
    State(state): State<AppState>,
    Json(req): Json<UpdateUser>,
) -> ApiResult<String> {
    let updated = state.users.update_user(req).await?;
    Ok(format!("User: {} updated successfully", updated.username))
}

/// `DELETE /api/users/delete` - deletes a user, keyed by username
pub async fn delete_user(
    State(state): State<AppState>,
    Json(req): Json<DeleteUserRequest>,
) -> ApiResult<String> {
    state.users.delete_user(&req.username).await?;
    Ok(format!("User: {} deleted successfully", req.username))
}
