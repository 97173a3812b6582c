//! ONLE Core - Shared types library.
//!
//! This crate provides common types used across all ONLE components:
//! - `storefront` - Catalog, filtering, cart and store state
//! - `cli` - Headless driver for listing the catalog and replaying sessions
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no logging,
//! no configuration. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, product options and pages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
