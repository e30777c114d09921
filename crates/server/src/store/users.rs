//! User-credential record store.

use std::path::{Path, PathBuf};

use greenleaf_core::UserRecord;

/// Read-only store over the provisioned user file.
///
/// Credentials are created out-of-band with `gl-cli user add`; the server
/// only ever reads them.
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store over the given backing file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all provisioned users.
    ///
    /// An absent or unparseable file yields no users; this never fails.
    pub async fn load(&self) -> Vec<UserRecord> {
        super::read_collection(&self.path).await
    }

    /// Look up a user by exact (case-sensitive) username.
    pub async fn find(&self, username: &str) -> Option<UserRecord> {
        self.load().await.into_iter().find(|u| u.username == username)
    }
}
