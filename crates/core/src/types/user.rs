//! User credential record.

use serde::{Deserialize, Serialize};

/// A provisioned admin user.
///
/// Records live in the users JSON file and are read-only from the server's
/// perspective; `gl-cli user add` is the only writer. Field names are
/// camelCase on disk, matching the original data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Unique login name (case-sensitive).
    pub username: String,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
}
