//! Static product catalog.
//!
//! The catalog is compiled into the binary from `content/catalog.json`,
//! validated once at startup and never mutated afterwards. It is cheaply
//! cloneable via `Arc`.

mod product;

use std::collections::HashSet;
use std::sync::Arc;

use onle_core::{Color, CurrencyCode, ProductId, Size};
use serde::Deserialize;
use thiserror::Error;

pub use product::Product;

/// Compiled-in product feed.
const SEED_CATALOG: &str = include_str!("../../content/catalog.json");

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The feed is not valid JSON or does not match the product shape.
    #[error("invalid catalog feed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same ID.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// A product is priced in a different currency than the rest of the feed.
    #[error("product {product_id} is priced in {found}, catalog trades in {expected}")]
    MixedCurrency {
        product_id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFeed {
    size_options: Vec<Size>,
    color_options: Vec<Color>,
    products: Vec<Product>,
}

/// The immutable product list plus the facet options shown in the filter panel.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    currency_code: CurrencyCode,
    size_options: Vec<Size>,
    color_options: Vec<Color>,
}

impl Catalog {
    /// Create a catalog from a product list and facet options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an ID
    /// and [`CatalogError::MixedCurrency`] if prices are not all in one
    /// currency. An empty catalog trades in the default currency.
    pub fn new(
        products: Vec<Product>,
        size_options: Vec<Size>,
        color_options: Vec<Color>,
    ) -> Result<Self, CatalogError> {
        let currency_code = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code);

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            let found = product
                .old_price
                .iter()
                .chain([&product.price])
                .map(|price| price.currency_code)
                .find(|code| *code != currency_code);
            if let Some(found) = found {
                return Err(CatalogError::MixedCurrency {
                    product_id: product.id,
                    expected: currency_code,
                    found,
                });
            }
            if !product.is_offered() {
                tracing::warn!(
                    product_id = %product.id,
                    "Product lists no sizes or colors and cannot be added to a cart"
                );
            }
        }

        Ok(Self {
            inner: Arc::new(CatalogInner {
                products,
                currency_code,
                size_options,
                color_options,
            }),
        })
    }

    /// Parse a catalog feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed is malformed or contains duplicate IDs.
    pub fn from_json(feed: &str) -> Result<Self, CatalogError> {
        let feed: CatalogFeed = serde_json::from_str(feed)?;
        Self::new(feed.products, feed.size_options, feed.color_options)
    }

    /// Load the compiled-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled feed is malformed.
    pub fn seeded() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED_CATALOG)?;
        tracing::debug!(products = catalog.len(), "Loaded seed catalog");
        Ok(catalog)
    }

    /// All products in feed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == id)
    }

    /// The first `count` products, as shown on the home page.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[Product] {
        let products = self.products();
        products.get(..count.min(products.len())).unwrap_or_default()
    }

    /// Currency every product is priced in; carts over this catalog use it.
    #[must_use]
    pub fn currency_code(&self) -> CurrencyCode {
        self.inner.currency_code
    }

    /// Sizes offered in the filter panel.
    #[must_use]
    pub fn size_options(&self) -> &[Size] {
        &self.inner.size_options
    }

    /// Colors offered in the filter panel.
    #[must_use]
    pub fn color_options(&self) -> &[Color] {
        &self.inner.color_options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::product;
    use onle_core::Price;

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = Catalog::seeded().unwrap();
        assert_eq!(catalog.len(), 6);

        let ids: Vec<i32> = catalog.products().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(catalog.products().iter().all(Product::is_offered));
    }

    #[test]
    fn test_seed_catalog_prices() {
        let catalog = Catalog::seeded().unwrap();
        let tee = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(tee.price, Price::rub(2990));
        assert_eq!(tee.old_price, Some(Price::rub(3990)));

        let hoodie = catalog.get(ProductId::new(2)).unwrap();
        assert_eq!(hoodie.price, Price::rub(5990));
        assert_eq!(hoodie.old_price, None);
    }

    #[test]
    fn test_seed_facet_options() {
        let catalog = Catalog::seeded().unwrap();
        let sizes: Vec<&str> = catalog.size_options().iter().map(Size::as_str).collect();
        assert_eq!(sizes, vec!["XS", "S", "M", "L", "XL", "XXL"]);

        let colors: Vec<&str> = catalog.color_options().iter().map(Color::as_str).collect();
        assert_eq!(colors, vec!["Черный", "Белый", "Серый", "Бежевый", "Синий"]);
    }

    #[test]
    fn test_featured_takes_first_products() {
        let catalog = Catalog::seeded().unwrap();
        let featured: Vec<i32> = catalog.featured(3).iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(featured, vec![1, 2, 3]);
        assert_eq!(catalog.featured(100).len(), 6);
        assert!(catalog.featured(0).is_empty());
    }

    #[test]
    fn test_catalog_currency_follows_products() {
        assert_eq!(Catalog::seeded().unwrap().currency_code(), CurrencyCode::RUB);

        let mut shirt = product(1, 20, &["M"], &["Blue"]);
        shirt.price = Price::new(rust_decimal::Decimal::from(20), CurrencyCode::USD);
        let catalog = Catalog::new(vec![shirt], vec![], vec![]).unwrap();
        assert_eq!(catalog.currency_code(), CurrencyCode::USD);

        let empty = Catalog::new(vec![], vec![], vec![]).unwrap();
        assert_eq!(empty.currency_code(), CurrencyCode::RUB);
    }

    #[test]
    fn test_mixed_currency_rejected() {
        let rub = product(1, 100, &["M"], &["Blue"]);
        let mut eur = product(2, 100, &["M"], &["Blue"]);
        eur.old_price = Some(Price::new(rust_decimal::Decimal::from(150), CurrencyCode::EUR));

        let err = Catalog::new(vec![rub, eur], vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MixedCurrency {
                expected: CurrencyCode::RUB,
                found: CurrencyCode::EUR,
                ..
            }
        ));
    }

    #[test]
    fn test_get_unknown_product() {
        let catalog = Catalog::seeded().unwrap();
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(
            vec![
                product(1, 100, &["M"], &["Черный"]),
                product(1, 200, &["L"], &["Белый"]),
            ],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_malformed_feed() {
        let err = Catalog::from_json(r#"{"products": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_clone_shares_products() {
        let catalog = Catalog::seeded().unwrap();
        let clone = catalog.clone();
        assert!(std::ptr::eq(catalog.products(), clone.products()));
    }
}
