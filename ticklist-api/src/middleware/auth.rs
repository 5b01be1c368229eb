/// HTTP Basic authentication middleware
///
/// Parses an `Authorization: Basic` header, loads the named user, and
/// verifies the supplied password against the stored Argon2id hash. On
/// success an [`AuthenticatedUser`] capability is inserted into request
/// extensions for handlers to extract; on failure the request is rejected
/// before reaching any handler.
///
/// Unknown usernames and wrong passwords both answer 401 with the same
/// message so the response does not reveal which part failed; the miss is
/// still logged server-side.
///
/// # Example
///
/// ```no_run
/// use axum::Extension;
/// use ticklist_shared::auth::identity::AuthenticatedUser;
///
/// async fn whoami(Extension(auth): Extension<AuthenticatedUser>) -> String {
///     format!("Hello, {}!", auth.username)
/// }
/// ```

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::error;

use crate::app::AppState;
use crate::error::ApiError;
use ticklist_shared::auth::{identity::AuthenticatedUser, password};
use ticklist_shared::models::user::User;

/// Basic authentication middleware layer
///
/// Layered onto the /api route groups when `REQUIRE_AUTH` is enabled.
pub async fn basic_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing credentials".to_string()))?;

    let encoded = auth_header
        .strip_prefix("Basic ")
        .ok_or_else(|| ApiError::BadRequest("Expected Basic credentials".to_string()))?;

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| ApiError::BadRequest("Invalid credential encoding".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::BadRequest("Invalid credential encoding".to_string()))?;

    let (username, supplied_password) = decoded
        .split_once(':')
        .ok_or_else(|| ApiError::BadRequest("Malformed credentials".to_string()))?;

    let user = User::find_by_username(&state.db, username)
        .await
        .map_err(|e| ApiError::InternalError(format!("Database error: {}", e)))?
        .ok_or_else(|| {
            error!(username, "User not found during authentication");
            ApiError::Unauthorized("Invalid username or password".to_string())
        })?;

    let valid = password::verify_password(supplied_password, &user.password_hash)
        .map_err(|e| ApiError::InternalError(format!("Password verification failed: {}", e)))?;

    if !valid {
        error!(username, "Password mismatch during authentication");
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    req.extensions_mut().insert(AuthenticatedUser::from_user(&user));

    Ok(next.run(req).await)
}
