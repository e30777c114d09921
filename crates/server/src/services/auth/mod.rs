//! Authentication service.
//!
//! Verifies login credentials against the provisioned user file. Session
//! issuance and teardown live in the HTTP layer (`middleware` + the auth
//! routes); this service only answers "is this username/password pair
//! valid".

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use greenleaf_core::UserRecord;

use crate::store::UserStore;

/// Authentication service.
pub struct AuthService {
    users: UserStore,
}

impl AuthService {
    /// Create a new authentication service over the user store.
    #[must_use]
    pub const fn new(users: UserStore) -> Self {
        Self { users }
    }

    /// Login with username and password.
    ///
    /// The username match is case-sensitive and exact; the password is
    /// verified against the stored Argon2 hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the user does not exist or
    /// the password is wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserRecord, AuthError> {
        let user = self
            .users
            .find(username)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        Ok(user)
    }
}

/// Hash a password using Argon2id.
///
/// Used by `gl-cli` when provisioning users; the server itself never hashes.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored PHC-format hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}
