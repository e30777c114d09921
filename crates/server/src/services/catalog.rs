//! Product catalog service.
//!
//! Validation and mutation logic for the catalog. The service is
//! authorization-agnostic: the route layer guards every mutating call with
//! the session extractor before it reaches this module.

use thiserror::Error;
use tokio::sync::Mutex;

use greenleaf_core::{Product, ProductDraft, ProductId, ProductPatch, ProductValidationError};

use crate::store::{ProductStore, StoreError};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field is missing/empty or the price is not positive.
    #[error("invalid product data: {0}")]
    InvalidInput(#[from] ProductValidationError),

    /// A product with this id already exists.
    #[error("product id already exists: {0}")]
    DuplicateId(ProductId),

    /// No product with this id exists.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Persisting the catalog failed.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

/// Product catalog service.
///
/// Every mutation is a full read-modify-write of the backing file,
/// serialized through an internal write lock so concurrent admin requests
/// cannot silently drop each other's changes. Reads do not take the lock.
pub struct CatalogService {
    products: ProductStore,
    write_lock: Mutex<()>,
}

impl CatalogService {
    /// Create a new catalog service over the product store.
    #[must_use]
    pub const fn new(products: ProductStore) -> Self {
        Self {
            products,
            write_lock: Mutex::const_new(()),
        }
    }

    /// Return the full catalog in persisted (insertion) order.
    pub async fn list_all(&self) -> Vec<Product> {
        self.products.load().await
    }

    /// Validate and append a new product.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a required field is missing or the price is
    /// not positive, `DuplicateId` if the id is already taken, or `Storage`
    /// if the catalog cannot be persisted. The store is untouched on every
    /// error path.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let candidate = draft.into_product()?;

        let _guard = self.write_lock.lock().await;
        let mut products = self.products.load().await;

        if products.iter().any(|p| p.id == candidate.id) {
            return Err(CatalogError::DuplicateId(candidate.id));
        }

        products.push(candidate.clone());
        self.products.save(&products).await?;

        tracing::info!(id = %candidate.id, "product created");
        Ok(candidate)
    }

    /// Merge a patch into an existing product and persist the result.
    ///
    /// The id is immutable; fields absent from the patch keep their current
    /// values. The merged record is validated the same way as a create
    /// candidate.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is absent, `InvalidInput` if the merged
    /// record fails validation, or `Storage` on persist failure.
    pub async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.products.load().await;

        let Some(slot) = products.iter_mut().find(|p| &p.id == id) else {
            return Err(CatalogError::NotFound(id.clone()));
        };

        let merged = slot.merge(patch);
        merged.validate()?;
        *slot = merged.clone();

        self.products.save(&products).await?;

        tracing::info!(id = %id, "product updated");
        Ok(merged)
    }

    /// Remove a product and persist the remaining catalog.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is absent, or `Storage` on persist
    /// failure.
    pub async fn delete(&self, id: &ProductId) -> Result<(), CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.products.load().await;

        let before = products.len();
        products.retain(|p| &p.id != id);
        if products.len() == before {
            return Err(CatalogError::NotFound(id.clone()));
        }

        self.products.save(&products).await?;

        tracing::info!(id = %id, "product deleted");
        Ok(())
    }
}
