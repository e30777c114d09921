//! Core types for GreenLeaf Pharmacy.
//!
//! This module provides the catalog and credential record types shared by
//! the server and the CLI.

pub mod product;
pub mod user;

pub use product::{Product, ProductDraft, ProductId, ProductPatch, ProductValidationError};
pub use user::UserRecord;
