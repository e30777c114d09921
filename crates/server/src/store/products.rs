//! Product record store.

use std::path::{Path, PathBuf};

use greenleaf_core::Product;

use super::StoreError;

/// File-backed store for the product catalog.
///
/// The store is the sole writer of the backing file; all catalog reads go
/// through [`load`](Self::load). Records keep their on-disk (insertion)
/// order.
pub struct ProductStore {
    path: PathBuf,
}

impl ProductStore {
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

    /// Load the persisted catalog.
    ///
    /// An absent or unparseable file yields an empty catalog; this never
    /// fails.
    pub async fn load(&self) -> Vec<Product> {
        super::read_collection(&self.path).await
    }

    /// Overwrite the backing file with the full given catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the temp-file write/rename
    /// fails; the previous contents stay in place in that case.
    pub async fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        super::write_collection(&self.path, products).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use greenleaf_core::ProductId;

    use super::*;

    fn sample(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Aspirin".to_owned(),
            image: "/i/p1.png".to_owned(),
            price: "9.99".parse().unwrap(),
            tag: None,
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::new(dir.path().join("products.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_unparseable_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = ProductStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProductStore::new(dir.path().join("products.json"));

        let products = vec![sample("p1"), sample("p2"), sample("p3")];
        store.save(&products).await.unwrap();

        assert_eq!(store.load().await, products);
    }

    #[tokio::test]
    async fn test_save_is_human_readable_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        let store = ProductStore::new(&path);

        store.save(&[sample("p1")]).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'), "expected pretty-printed output");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_previous_contents() {
        // A save into a missing parent directory must error without having
        // touched anything a reader could observe.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("products.json");
        let store = ProductStore::new(&path);

        assert!(store.save(&[sample("p1")]).await.is_err());
        assert!(store.load().await.is_empty());
    }
}
