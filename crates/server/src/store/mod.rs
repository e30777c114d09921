//! Flat-file record stores.
//!
//! Persistence for this system is two human-editable JSON files under the
//! configured data directory:
//!
//! - `products.json` - the catalog, rewritten wholesale on every mutation
//! - `users.json` - provisioned admin credentials, read-only for the server
//!
//! Reads never fail: an absent or unparseable file degrades to an empty
//! collection (logged at `warn`). Writes serialize the full collection as
//! pretty-printed JSON to a sibling temp file and rename it over the target,
//! so a crashed writer leaves the previous contents intact.

pub mod products;
pub mod users;

pub use products::ProductStore;
pub use users::UserStore;

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when persisting a record collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Records could not be serialized.
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read a JSON collection, degrading to empty on any failure.
///
/// Callers cannot distinguish "no records" from "file unreadable"; the
/// condition is only visible in the logs.
pub(crate) async fn read_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "record file unreadable, treating as empty");
            }
            return Vec::new();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "record file unparseable, treating as empty");
            Vec::new()
        }
    }
}

/// Atomically replace `path` with the pretty-printed JSON of `records`.
pub(crate) async fn write_collection<T: serde::Serialize>(
    path: &Path,
    records: &[T],
) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(records)?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;

    Ok(())
}
