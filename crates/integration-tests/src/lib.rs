//! Integration test support for GreenLeaf Pharmacy.
//!
//! Each test spawns the full application in-process on an ephemeral port -
//! the same router, session layer, and static mounts the binary serves -
//! over a throwaway data directory, then drives it with a cookie-aware
//! `reqwest` client.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p greenleaf-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::Ipv4Addr;
use std::path::PathBuf;

use greenleaf_core::UserRecord;
use greenleaf_server::config::ServerConfig;
use greenleaf_server::routes;
use greenleaf_server::services::auth::hash_password;
use greenleaf_server::state::AppState;

/// Username provisioned into every test server.
pub const TEST_USERNAME: &str = "admin";

/// Password provisioned into every test server.
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// A running test server over a throwaway data directory.
pub struct TestServer {
    /// Base URL of the spawned server (e.g. `http://127.0.0.1:49152`).
    pub base_url: String,
    /// Data directory holding `products.json` / `users.json`.
    pub data_dir: PathBuf,
    /// Upload directory backing `/uploads`.
    pub upload_dir: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestServer {
    /// Spawn the application with one provisioned admin user.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory, listener, or user file cannot be set
    /// up; tests have nothing useful to do in that case.
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().join("data");
        let public_dir = dir.path().join("public");
        let upload_dir = dir.path().join("uploads");
        for d in [&data_dir, &public_dir, &upload_dir] {
            std::fs::create_dir_all(d).expect("Failed to create test dir");
        }

        // Provision the test admin the same way gl-cli does.
        let users = vec![UserRecord {
            username: TEST_USERNAME.to_owned(),
            password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash test password"),
        }];
        std::fs::write(
            data_dir.join("users.json"),
            serde_json::to_vec_pretty(&users).expect("Failed to serialize test users"),
        )
        .expect("Failed to write test users");

        let config = ServerConfig {
            host: Ipv4Addr::LOCALHOST.into(),
            port: 0,
            base_url: "http://localhost".to_owned(),
            data_dir: data_dir.clone(),
            public_dir,
            upload_dir: upload_dir.clone(),
        };

        let app = routes::app(AppState::new(config));

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server crashed");
        });

        Self {
            base_url: format!("http://{addr}"),
            data_dir,
            upload_dir,
            _dir: dir,
        }
    }

    /// Absolute URL for a server path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Raw bytes of the products file; empty if it does not exist yet.
    #[must_use]
    pub fn store_bytes(&self) -> Vec<u8> {
        std::fs::read(self.data_dir.join("products.json")).unwrap_or_default()
    }
}

/// Create a cookie-aware HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log the test admin in, carrying the session cookie in `client`.
///
/// # Panics
///
/// Panics if the login request fails or is rejected.
pub async fn login(client: &reqwest::Client, server: &TestServer) {
    let resp = client
        .post(server.url("/api/login"))
        .json(&serde_json::json!({
            "username": TEST_USERNAME,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Login request failed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK, "login rejected");
}

/// A valid create body for the canonical test product.
#[must_use]
pub fn aspirin_json() -> serde_json::Value {
    serde_json::json!({
        "id": "p1",
        "name": "Aspirin",
        "image": "/i/p1.png",
        "price": 9.99,
    })
}
