/// User service: business rules for user CRUD and credential hashing
///
/// Registration checks the username before the email, defaults blank roles
/// to `"USER"`, and hashes the submitted plaintext with Argon2id before it
/// reaches the store. Update persists the incoming record as-is, keyed by
/// username; the caller is responsible for supplying an already-hashed
/// password.
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::service::user::{RegisterUser, UserService};
///
/// # async fn example(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let users = UserService::new(pool);
///
/// let user = users.add_user(RegisterUser {
///     username: "alice".to_string(),
///     email: "a@x.com".to_string(),
///     password: "secret".to_string(),
///     roles: None,
/// }).await?;
///
/// assert_eq!(user.roles, "USER");
/// assert_ne!(user.password_hash, "secret");
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::auth::password::hash_password;
use crate::error::{ServiceError, ServiceResult};
use crate::models::user::{CreateUser, User};

/// Registration input carrying a plaintext password
///
/// The password is hashed inside `add_user`; it is never stored as
/// submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Desired username
    pub username: String,

    /// Email address
    pub email: String,

    /// Plaintext password (hashed before persisting)
    pub password: String,

    /// Comma-separated role names; defaults to "USER" when absent or blank
    pub roles: Option<String>,
}

/// Update input, persisted as-is
///
/// `password_hash` is stored without re-hashing; supplying a plaintext
/// value here would store it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// Username identifying the record to update
    pub username: String,

    /// New email address
    pub email: String,

    /// New password hash
    pub password_hash: String,

    /// New comma-separated role names
    pub roles: String,
}

/// Business service for managing users
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    /// Creates a user service backed by the given pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a new user
    ///
    /// The username check runs before the email check, blank roles default
    /// to `"USER"`, and the plaintext password is hashed with Argon2id.
    ///
    /// # Errors
    ///
    /// - `Validation` when username or email is blank, or the email is
    ///   malformed
    /// - `Conflict` when the username or email is already taken
    pub async fn add_user(&self, data: RegisterUser) -> ServiceResult<User> {
        validate_username(&data.username)?;
        validate_email(&data.email)?;

        if User::find_by_username(&self.pool, &data.username)
            .await?
            .is_some()
        {
            error!(username = %data.username, "Username already exists");
            return Err(ServiceError::Conflict(
                "Username already exists".to_string(),
            ));
        }

        if User::find_by_email(&self.pool, &data.email).await?.is_some() {
            error!(email = %data.email, "Email already exists");
            return Err(ServiceError::Conflict("Email already exists".to_string()));
        }

        let roles = normalize_roles(data.roles.as_deref());
        let password_hash = hash_password(&data.password)?;

        Ok(User::create(
            &self.pool,
            CreateUser {
                username: data.username,
                email: data.email,
                password_hash,
                roles,
            },
        )
        .await?)
    }

    /// Retrieves a user by username
    ///
    /// # Errors
    ///
    /// - `Validation` when the username is blank
    /// - `NotFound` when no user has that username
    pub async fn user_by_username(&self, username: &str) -> ServiceResult<User> {
        validate_username(username)?;

        User::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| {
                error!(username, "User not found");
                ServiceError::NotFound("User not found".to_string())
            })
    }

    /// Retrieves a user by email address
    ///
    /// # Errors
    ///
    /// - `Validation` when the email is blank or malformed
    /// - `NotFound` when no user has that email
    pub async fn user_by_email(&self, email: &str) -> ServiceResult<User> {
        validate_email(email)?;

        User::find_by_email(&self.pool, email).await?.ok_or_else(|| {
            error!(email, "User not found");
            ServiceError::NotFound("User not found".to_string())
        })
    }

    /// Retrieves a user by id
    ///
    /// # Errors
    ///
    /// `NotFound` when no user has that id.
    pub async fn user_by_id(&self, id: Uuid) -> ServiceResult<User> {
        User::find_by_id(&self.pool, id).await?.ok_or_else(|| {
            error!(%id, "User not found");
            ServiceError::NotFound("User not found".to_string())
        })
    }

    /// Overwrites a user's record, keyed by username
    ///
    /// The incoming record is persisted as-is; the password hash is stored
    /// without re-hashing.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no user has the given username
    /// - `Conflict` when the new email belongs to another account
    pub async fn update_user(&self, data: UpdateUser) -> ServiceResult<User> {
        if let Some(other) = User::find_by_email(&self.pool, &data.email).await? {
            if other.username != data.username {
                error!(email = %data.email, "Email already exists");
                return Err(ServiceError::Conflict("Email already exists".to_string()));
            }
        }

        User::update_by_username(
            &self.pool,
            &data.username,
            &data.email,
            &data.password_hash,
            &data.roles,
        )
        .await?
        .ok_or_else(|| {
            error!(username = %data.username, "User not found for update");
            ServiceError::NotFound("User not found".to_string())
        })
    }

    /// Deletes a user by username
    ///
    /// # Errors
    ///
    /// `NotFound` when no user has that username.
    pub async fn delete_user(&self, username: &str) -> ServiceResult<()> {
        if !User::delete_by_username(&self.pool, username).await? {
            error!(username, "User not found for deletion");
            return Err(ServiceError::NotFound("User not found".to_string()));
        }
        Ok(())
    }

    /// Lists all users; empty when there are none
    pub async fn all_users(&self) -> ServiceResult<Vec<User>> {
        Ok(User::find_all(&self.pool).await?)
    }
}

/// Resolves the stored roles string, defaulting blank input to "USER"
fn normalize_roles(roles: Option<&str>) -> String {
    match roles {
        Some(r) if !r.trim().is_empty() => r.to_string(),
        _ => "USER".to_string(),
    }
}

fn validate_username(username: &str) -> ServiceResult<()> {
    if username.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Username cannot be blank".to_string(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> ServiceResult<()> {
    if email.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Email cannot be blank".to_string(),
        ));
    }
    if !email.validate_email() {
        return Err(ServiceError::Validation(
            "Email should be valid".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_roles_defaults_when_absent_or_blank() {
        assert_eq!(normalize_roles(None), "USER");
        assert_eq!(normalize_roles(Some("")), "USER");
        assert_eq!(normalize_roles(Some("   ")), "USER");
    }

    #[test]
    fn test_normalize_roles_keeps_explicit_value() {
        assert_eq!(normalize_roles(Some("ADMIN,USER")), "ADMIN,USER");
    }

    #[test]
    fn test_validate_username_rejects_blank() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
    }

    #[test]
    fn test_validate_email_rejects_blank_and_malformed() {
        assert!(validate_email("a@x.com").is_ok());

        let blank = validate_email("").unwrap_err();
        assert_eq!(blank.to_string(), "Email cannot be blank");

        let malformed = validate_email("not-an-email").unwrap_err();
        assert_eq!(malformed.to_string(), "Email should be valid");
    }
}
