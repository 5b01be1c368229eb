/// Authentication primitives for Ticklist
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`identity`]: The `AuthenticatedUser` capability handed to request
///   handlers after credential verification
///
/// The HTTP-facing Basic auth middleware lives in the API crate; this
/// module stays framework-free so the identity representation is not
/// coupled to any particular auth surface.

pub mod identity;
pub mod password;
