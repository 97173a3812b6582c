//! Unified error handling.
//!
//! Provides a unified `StoreError` type returned by intent dispatch. Module
//! errors convert into it with `?`.

use onle_core::ProductId;
use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Cart operation was rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The intent names a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

impl StoreError {
    /// Returns `true` if the error was caused by the caller's input rather
    /// than by a broken catalog.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Cart(_) | Self::UnknownProduct(_))
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
