//! Integration tests for the ONLE storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p onle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_filter` - Facet filtering over the seed catalog
//! - `shopping_session` - Intent-driven cart scenarios through `Storefront`
//!
//! This crate only holds shared fixtures; the scenarios live under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use onle_core::{Color, ProductId, Size};
use onle_storefront::{Catalog, Intent, LineKey, Storefront};

/// Storefront over the seed catalog with default settings.
///
/// # Panics
///
/// Panics if the bundled catalog is malformed.
#[must_use]
pub fn storefront() -> Storefront {
    Storefront::with_defaults(Catalog::seeded().expect("seed catalog loads"))
}

/// # Panics
///
/// Panics if `value` is not a valid size.
#[must_use]
pub fn size(value: &str) -> Size {
    Size::parse(value).expect("valid size")
}

/// # Panics
///
/// Panics if `value` is not a valid color.
#[must_use]
pub fn color(value: &str) -> Color {
    Color::parse(value).expect("valid color")
}

#[must_use]
pub fn line_key(product_id: i32, size_value: &str, color_value: &str) -> LineKey {
    LineKey::new(
        ProductId::new(product_id),
        size(size_value),
        color(color_value),
    )
}

/// Add-to-cart intent using the product's default size and color.
#[must_use]
pub const fn add(product_id: i32) -> Intent {
    Intent::AddToCart {
        product_id: ProductId::new(product_id),
        size: None,
        color: None,
    }
}

/// IDs of the products the current filter lets through, in catalog order.
#[must_use]
pub fn visible_ids(store: &Storefront) -> Vec<i32> {
    store
        .visible_products()
        .iter()
        .map(|p| p.id.as_i32())
        .collect()
}
