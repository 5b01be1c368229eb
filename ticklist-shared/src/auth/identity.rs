/// Authenticated-user capability
///
/// `AuthenticatedUser` is the shape the authentication middleware hands to
/// request handlers after verifying credentials: the username, the stored
/// password hash it verified against, and the authority set derived from
/// the account's comma-separated roles. It is a plain struct, deliberately
/// decoupled from any auth framework; the middleware in the API crate
/// inserts it into request extensions.
///
/// # Example
///
/// ```
/// use ticklist_shared::auth::identity::AuthenticatedUser;
///
/// let auth = AuthenticatedUser::new("alice", "$argon2id$...", "ADMIN,USER");
/// assert!(auth.has_authority("ADMIN"));
/// assert!(!auth.has_authority("AUDITOR"));
/// ```

use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Identity attached to a request after successful authentication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Username the credentials matched
    pub username: String,

    /// Stored password hash the credentials were verified against
    pub password_hash: String,

    /// Authority names parsed from the account's roles
    pub authorities: Vec<String>,
}

impl AuthenticatedUser {
    /// Builds an identity from raw parts, parsing the roles string
    pub fn new(username: &str, password_hash: &str, roles: &str) -> Self {
        Self {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            authorities: parse_authorities(roles),
        }
    }

    /// Builds an identity from a stored user record
    pub fn from_user(user: &User) -> Self {
        Self::new(&user.username, &user.password_hash, &user.roles)
    }

    /// Checks whether the identity carries a named authority
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

/// Splits a comma-separated roles string into authority names
///
/// Tokens are trimmed; empty tokens are skipped, so `"USER,"` and
/// `" USER "` both yield a single authority.
pub fn parse_authorities(roles: &str) -> Vec<String> {
    roles
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_role() {
        assert_eq!(parse_authorities("USER"), vec!["USER"]);
    }

    #[test]
    fn test_parse_multiple_roles() {
        assert_eq!(parse_authorities("ADMIN,USER"), vec!["ADMIN", "USER"]);
    }

    #[test]
    fn test_parse_trims_and_skips_empty_tokens() {
        assert_eq!(parse_authorities(" ADMIN , USER ,"), vec!["ADMIN", "USER"]);
        assert!(parse_authorities("").is_empty());
        assert!(parse_authorities(" , ").is_empty());
    }

    #[test]
    fn test_has_authority() {
        let auth = AuthenticatedUser::new("alice", "$argon2id$x", "ADMIN,USER");
        assert!(auth.has_authority("ADMIN"));
        assert!(auth.has_authority("USER"));
        assert!(!auth.has_authority("ROOT"));
    }
}
