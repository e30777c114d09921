//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit a local single-operator setup.
//!
//! - `GREENLEAF_HOST` - Bind address (default: 127.0.0.1)
//! - `GREENLEAF_PORT` - Listen port (default: 3000)
//! - `GREENLEAF_BASE_URL` - Public URL the site is served from
//!   (default: `http://localhost:3000`; an https URL turns on the Secure
//!   session-cookie flag)
//! - `GREENLEAF_DATA_DIR` - Directory holding `products.json` and
//!   `users.json` (default: `data`)
//! - `GREENLEAF_PUBLIC_DIR` - Static storefront/admin assets served at `/`
//!   (default: `public`)
//! - `GREENLEAF_UPLOAD_DIR` - Stored product images, served at `/uploads`
//!   (default: `uploads`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Directory holding the flat-file record stores
    pub data_dir: PathBuf,
    /// Directory of static storefront/admin assets
    pub public_dir: PathBuf,
    /// Directory of uploaded product images
    pub upload_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("GREENLEAF_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GREENLEAF_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("GREENLEAF_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GREENLEAF_PORT".to_owned(), e.to_string()))?;
        let base_url = get_env_or_default("GREENLEAF_BASE_URL", "http://localhost:3000");
        let data_dir = PathBuf::from(get_env_or_default("GREENLEAF_DATA_DIR", "data"));
        let public_dir = PathBuf::from(get_env_or_default("GREENLEAF_PUBLIC_DIR", "public"));
        let upload_dir = PathBuf::from(get_env_or_default("GREENLEAF_UPLOAD_DIR", "uploads"));

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            public_dir,
            upload_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Path of the products record file.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    /// Path of the user-credential record file.
    #[must_use]
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    /// Whether session cookies should carry the Secure flag.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_owned(),
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..ServerConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_store_paths_live_under_data_dir() {
        let config = ServerConfig {
            data_dir: PathBuf::from("/srv/greenleaf/data"),
            ..ServerConfig::default()
        };

        assert_eq!(
            config.products_path(),
            Path::new("/srv/greenleaf/data/products.json")
        );
        assert_eq!(
            config.users_path(),
            Path::new("/srv/greenleaf/data/users.json")
        );
    }

    #[test]
    fn test_secure_follows_base_url_scheme() {
        let mut config = ServerConfig::default();
        assert!(!config.is_secure());

        config.base_url = "https://shop.greenleafpharmacy.in".to_owned();
        assert!(config.is_secure());
    }
}
