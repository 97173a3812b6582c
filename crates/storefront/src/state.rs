//! Store state and the `Storefront` that owns it.

use onle_core::{CurrencyCode, Page};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartTotals};
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::error::Result;
use crate::filter::FilterSelection;
use crate::intent::{Intent, reduce};
use crate::view::StoreView;

/// Number of featured products on the home page when not configured.
pub const DEFAULT_FEATURED_COUNT: usize = 3;

/// Everything that changes while the shopper uses the store.
///
/// Built only through [`reduce`], never deserialised, so cart invariants hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreState {
    pub page: Page,
    pub cart: Cart,
    pub filters: FilterSelection,
}

impl StoreState {
    /// Fresh state on the home page with an empty cart in `currency_code`.
    #[must_use]
    pub fn new(currency_code: CurrencyCode) -> Self {
        Self {
            page: Page::default(),
            cart: Cart::new(currency_code),
            filters: FilterSelection::default(),
        }
    }
}

/// The catalog plus the current state.
///
/// Intents go in through [`Storefront::dispatch`]; derived data (visible
/// products, totals, the full [`StoreView`]) is recomputed on demand. The
/// cart trades in the catalog's currency.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    content: ContentStore,
    state: StoreState,
    featured_count: usize,
}

impl Storefront {
    /// Create a storefront over `catalog` with the configured featured count.
    #[must_use]
    pub fn new(catalog: Catalog, config: &StorefrontConfig) -> Self {
        info!(
            products = catalog.len(),
            currency = %catalog.currency_code(),
            "Storefront ready"
        );
        Self {
            state: StoreState::new(catalog.currency_code()),
            catalog,
            content: ContentStore::default(),
            featured_count: config.featured_count,
        }
    }

    /// Create a storefront with three featured products.
    #[must_use]
    pub fn with_defaults(catalog: Catalog) -> Self {
        Self {
            state: StoreState::new(catalog.currency_code()),
            catalog,
            content: ContentStore::default(),
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }

    /// Attach payment, review and delivery content for the informational pages.
    #[must_use]
    pub fn with_content(mut self, content: ContentStore) -> Self {
        self.content = content;
        self
    }

    /// Apply an intent.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error; the state is unchanged in that case.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        let name = intent.name();
        match reduce(&self.catalog, &self.state, intent) {
            Ok(next) => {
                self.state = next;
                debug!(intent = name, "Intent applied");
                Ok(())
            }
            Err(err) => {
                warn!(intent = name, error = %err, "Intent rejected");
                Err(err)
            }
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn content(&self) -> &ContentStore {
        &self.content
    }

    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.state.cart
    }

    #[must_use]
    pub const fn featured_count(&self) -> usize {
        self.featured_count
    }

    /// Catalog products passing the current filter selection.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.state.filters.apply(self.catalog.products())
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.state.cart.totals()
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn view(&self) -> StoreView {
        StoreView::build(&self.catalog, &self.content, &self.state, self.featured_count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{color, size};
    use onle_core::{Price, ProductId};
    use rust_decimal::Decimal;

    fn storefront() -> Storefront {
        Storefront::with_defaults(Catalog::seeded().unwrap())
    }

    #[test]
    fn test_dispatch_updates_state() {
        let mut store = storefront();
        store
            .dispatch(Intent::Navigate { page: Page::Cart })
            .unwrap();
        assert_eq!(store.state().page, Page::Cart);
    }

    #[test]
    fn test_dispatch_error_keeps_state() {
        let mut store = storefront();
        store
            .dispatch(Intent::AddToCart {
                product_id: ProductId::new(1),
                size: None,
                color: None,
            })
            .unwrap();
        let before = store.state().clone();

        let result = store.dispatch(Intent::AddToCart {
            product_id: ProductId::new(1),
            size: Some(size("XXL")),
            color: None,
        });
        assert!(result.is_err());
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_visible_products_follow_filters() {
        let mut store = storefront();
        assert_eq!(store.visible_products().len(), 6);

        store
            .dispatch(Intent::ToggleSize { size: size("XS") })
            .unwrap();
        let ids: Vec<i32> = store
            .visible_products()
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 4]);

        store
            .dispatch(Intent::ToggleColor {
                color: color("Бежевый"),
            })
            .unwrap();
        let ids: Vec<i32> = store
            .visible_products()
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_totals_follow_cart() {
        let mut store = storefront();
        for product_id in [1, 1, 2] {
            store
                .dispatch(Intent::AddToCart {
                    product_id: ProductId::new(product_id),
                    size: None,
                    color: None,
                })
                .unwrap();
        }
        let totals = store.totals();
        assert_eq!(totals.total_price, Price::rub(11970));
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn test_new_uses_config() {
        let config = StorefrontConfig {
            featured_count: 2,
            ..StorefrontConfig::default()
        };
        let store = Storefront::new(Catalog::seeded().unwrap(), &config);
        assert_eq!(store.featured_count(), 2);
        assert_eq!(store.cart().currency_code(), CurrencyCode::RUB);
        assert_eq!(store.view().featured.len(), 2);
    }

    #[test]
    fn test_currency_setting_does_not_reach_the_cart() {
        let config =
            StorefrontConfig::from_lookup(|key: &str| (key == "ONLE_CURRENCY").then(|| "USD".to_string()))
                .unwrap();
        let mut store = Storefront::new(Catalog::seeded().unwrap(), &config);
        store
            .dispatch(Intent::AddToCart {
                product_id: ProductId::new(1),
                size: None,
                color: None,
            })
            .unwrap();
        assert_eq!(store.totals().total_price, Price::rub(2990));
    }

    #[test]
    fn test_cart_uses_catalog_currency() {
        let mut shirt = crate::test_support::product(1, 20, &["M"], &["Blue"]);
        shirt.price = Price::new(Decimal::from(20), CurrencyCode::USD);
        let catalog = Catalog::new(vec![shirt], vec![], vec![]).unwrap();

        let mut store = Storefront::new(catalog, &StorefrontConfig::default());
        assert_eq!(store.cart().currency_code(), CurrencyCode::USD);
        store
            .dispatch(Intent::AddToCart {
                product_id: ProductId::new(1),
                size: None,
                color: None,
            })
            .unwrap();
        assert_eq!(store.view().cart.subtotal, "$20");
    }

    #[test]
    fn test_view_includes_attached_content() {
        let mut store = storefront().with_content(ContentStore::seeded().unwrap());
        assert!(store.view().content.is_none());

        store
            .dispatch(Intent::Navigate {
                page: Page::Reviews,
            })
            .unwrap();
        assert!(store.view().content.is_some());
        assert_eq!(store.content().reviews().len(), 3);
    }
}
