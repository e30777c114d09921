//! Catalog product record, draft, patch, and validation.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`Product`] or [`ProductDraft`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    /// The product id is missing or empty.
    #[error("product id is required")]
    MissingId,
    /// The product name is missing or empty.
    #[error("product name is required")]
    MissingName,
    /// The image URI is missing or empty.
    #[error("product image is required")]
    MissingImage,
    /// The price is missing, zero, or negative.
    #[error("product price must be a positive number")]
    InvalidPrice,
}

/// A caller-assigned product identifier.
///
/// Ids are opaque strings chosen by the operator (e.g. `"med001"`).
/// Uniqueness across the catalog is enforced by the product service,
/// not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A catalog product.
///
/// Persisted as one entry of the products JSON file and served verbatim by
/// the catalog API. `price` is carried as a [`Decimal`] but crosses the wire
/// as a plain JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-assigned unique id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URI shown on the storefront card.
    pub image: String,
    /// Unit price, strictly positive.
    pub price: Decimal,
    /// Optional display tag (e.g. "Pain Relief").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Product {
    /// Validate the required-field invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductValidationError`] if the id, name, or image is
    /// empty (whitespace-only counts as empty) or the price is not
    /// strictly positive.
    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ProductValidationError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::MissingName);
        }
        if self.image.trim().is_empty() {
            return Err(ProductValidationError::MissingImage);
        }
        if self.price <= Decimal::ZERO {
            return Err(ProductValidationError::InvalidPrice);
        }
        Ok(())
    }

    /// Merge a patch over this record, field by field.
    ///
    /// The id is immutable: the result always keeps `self.id`, and a patch
    /// carries no id at all. Fields absent from the patch keep their current
    /// values. An explicitly empty `tag` clears the tag.
    ///
    /// The merged record is *not* validated here; callers re-validate it the
    /// same way as a create candidate.
    #[must_use]
    pub fn merge(&self, patch: &ProductPatch) -> Self {
        let tag = match &patch.tag {
            Some(t) if t.trim().is_empty() => None,
            Some(t) => Some(t.clone()),
            None => self.tag.clone(),
        };

        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            image: patch.image.clone().unwrap_or_else(|| self.image.clone()),
            price: patch.price.unwrap_or(self.price),
            tag,
        }
    }
}

/// An unvalidated create candidate as it arrives over the wire.
///
/// Every field is optional so that a missing field surfaces as a
/// [`ProductValidationError`] (HTTP 400) rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Caller-assigned unique id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Optional display tag; empty string counts as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ProductDraft {
    /// Validate the draft and convert it into a [`Product`].
    ///
    /// # Errors
    ///
    /// Returns a [`ProductValidationError`] naming the first missing or
    /// invalid field.
    pub fn into_product(self) -> Result<Product, ProductValidationError> {
        let id = self
            .id
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProductValidationError::MissingId)?;
        let name = self
            .name
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProductValidationError::MissingName)?;
        let image = self
            .image
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProductValidationError::MissingImage)?;
        let price = self
            .price
            .filter(|p| *p > Decimal::ZERO)
            .ok_or(ProductValidationError::InvalidPrice)?;
        let tag = self.tag.filter(|t| !t.trim().is_empty());

        Ok(Product {
            id: ProductId::new(id),
            name,
            image,
            price,
            tag,
        })
    }
}

/// A partial product update.
///
/// Every field is optional; unknown fields in the request body (including a
/// stray `id`) are ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    /// Replacement display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Replacement unit price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Replacement tag; empty string clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}
