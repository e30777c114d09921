//! Seed the product catalog with starter data.
//!
//! Writes a small pharmacy catalog so a fresh install has something on the
//! shelf. Prices are rupees, matching the storefront's display currency.

use thiserror::Error;

use greenleaf_core::{Product, ProductId};
use greenleaf_server::config::{ConfigError, ServerConfig};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the catalog failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A catalog already exists and `--force` was not given.
    #[error("Catalog already exists at {0}; pass --force to overwrite")]
    AlreadySeeded(String),
}

/// Write the starter catalog.
///
/// # Errors
///
/// Returns `SeedError::AlreadySeeded` if the products file exists and
/// `force` is false, or an I/O error if it cannot be written.
pub async fn catalog(force: bool) -> Result<(), SeedError> {
    let config = ServerConfig::from_env()?;
    let path = config.products_path();

    if !force && tokio::fs::try_exists(&path).await? {
        return Err(SeedError::AlreadySeeded(path.display().to_string()));
    }

    let products = starter_catalog();

    tokio::fs::create_dir_all(&config.data_dir).await?;
    tokio::fs::write(&path, serde_json::to_vec_pretty(&products)?).await?;

    tracing::info!("Seeded {} products", products.len());
    tracing::info!("  File: {}", path.display());

    Ok(())
}

/// The starter pharmacy shelf.
fn starter_catalog() -> Vec<Product> {
    [
        ("med001", "Paracetamol 500mg", "25.50", Some("Pain Relief")),
        ("med002", "Aspirin 300mg", "9.99", Some("Pain Relief")),
        ("med003", "Honey Cough Syrup", "99.00", Some("Cold & Flu")),
        ("med004", "Vitamin C 1000mg", "150.00", Some("Supplements")),
        ("med005", "Adhesive Bandages (20)", "45.00", Some("First Aid")),
        ("med006", "Antiseptic Liquid 100ml", "78.50", Some("First Aid")),
        ("med007", "Digital Thermometer", "249.00", None),
    ]
    .into_iter()
    .map(|(id, name, price, tag)| Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        image: format!("/images/{id}.png"),
        price: price.parse().unwrap_or_default(),
        tag: tag.map(str::to_owned),
    })
    .collect()
}
