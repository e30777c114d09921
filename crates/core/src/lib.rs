//! GreenLeaf Core - Shared types library.
//!
//! This crate provides common types used across all GreenLeaf components:
//! - `server` - Public catalog API and admin CRUD API
//! - `cli` - Command-line tools for provisioning and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no file
//! access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product records, patches, and user credential records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
