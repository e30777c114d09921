//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::{AuthService, CatalogService};
use crate::store::{ProductStore, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the two services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: CatalogService,
    auth: AuthService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The stores are rooted at the paths the configuration names; the
    /// backing files are opened lazily per operation, so construction never
    /// touches the filesystem.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let catalog = CatalogService::new(ProductStore::new(config.products_path()));
        let auth = AuthService::new(UserStore::new(config.users_path()));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                auth,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the authentication service.
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.inner.auth
    }
}
