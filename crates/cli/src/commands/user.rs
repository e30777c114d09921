//! Admin user provisioning commands.
//!
//! The server treats `users.json` as read-only; this module is the
//! out-of-band writer that provisions credentials into it.
//!
//! # Usage
//!
//! ```bash
//! gl-cli user add -u admin -p 'a-long-password'
//! gl-cli user list
//! ```

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use greenleaf_core::UserRecord;
use greenleaf_server::config::{ConfigError, ServerConfig};
use greenleaf_server::services::auth::hash_password;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur during user provisioning.
#[derive(Debug, Error)]
pub enum UserError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The users file holds something other than a user array.
    #[error("Cannot parse users file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Password too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    WeakPassword,

    /// User already exists.
    #[error("User already exists: {0}")]
    UserExists(String),

    /// Hashing the password failed.
    #[error("Password hashing failed")]
    Hash,
}

/// Provision a new admin user.
///
/// Hashes the password with Argon2id and appends the record to the users
/// file named by the server configuration, creating the file (and the data
/// directory) if needed.
///
/// # Errors
///
/// Returns `UserError::UserExists` for a duplicate username,
/// `UserError::WeakPassword` for a short password, or an I/O/parse error if
/// the users file cannot be read or written.
pub async fn add(username: &str, password: &SecretString) -> Result<(), UserError> {
    let config = ServerConfig::from_env()?;
    let path = config.users_path();

    if password.expose_secret().len() < MIN_PASSWORD_LENGTH {
        return Err(UserError::WeakPassword);
    }

    let mut users = read_users(&path).await?;

    if users.iter().any(|u| u.username == username) {
        return Err(UserError::UserExists(username.to_owned()));
    }

    let password_hash = hash_password(password.expose_secret()).map_err(|_| UserError::Hash)?;
    users.push(UserRecord {
        username: username.to_owned(),
        password_hash,
    });

    tokio::fs::create_dir_all(&config.data_dir).await?;
    tokio::fs::write(&path, serde_json::to_vec_pretty(&users)?).await?;

    tracing::info!("User provisioned: {username}");
    tracing::info!("  File: {}", path.display());

    Ok(())
}

/// List provisioned usernames.
///
/// # Errors
///
/// Returns an I/O/parse error if the users file exists but cannot be read.
pub async fn list() -> Result<(), UserError> {
    let config = ServerConfig::from_env()?;
    let users = read_users(&config.users_path()).await?;

    if users.is_empty() {
        tracing::info!("No users provisioned. Add one with: gl-cli user add");
        return Ok(());
    }

    tracing::info!("Provisioned users ({}):", users.len());
    for user in users {
        tracing::info!("  {}", user.username);
    }

    Ok(())
}

/// Read the users file, treating an absent file as empty.
///
/// Unlike the server's silently-degrading reads, a *corrupt* file is an
/// error here: overwriting records the operator may still want is worse
/// than stopping.
async fn read_users(path: &Path) -> Result<Vec<UserRecord>, UserError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_users_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let users = read_users(&dir.path().join("users.json")).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_read_users_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_users(&path).await,
            Err(UserError::Parse(_))
        ));
    }
}
