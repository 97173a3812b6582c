//! Display data for the presentation layer.
//!
//! Views are plain serialisable snapshots with prices already formatted, so a
//! renderer needs no business logic of its own.

use onle_core::{Category, Page, Price, ProductId};
use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::catalog::{Catalog, Product};
use crate::content::{ContentStore, DeliveryOption, PaymentMethod, Review};
use crate::state::StoreState;

/// Product card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub old_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub image: String,
    pub category: Category,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.to_string(),
            old_price: product.old_price.as_ref().map(Price::to_string),
            discount_percent: product.discount_percent(),
            image: product.image.clone(),
            category: product.category,
            sizes: product.sizes.iter().map(ToString::to_string).collect(),
            colors: product.colors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    /// Stable line key (`id-size-color`).
    pub key: String,
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub color: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            key: line.key().to_string(),
            product_id: line.product.id,
            name: line.product.name.clone(),
            size: line.selected_size.to_string(),
            color: line.selected_color.to_string(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            price: line.product.price.to_string(),
            line_price: line.line_total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
    pub is_empty: bool,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: totals.total_price.to_string(),
            item_count: totals.item_count,
            is_empty: cart.is_empty(),
        }
    }
}

/// One checkbox in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptionView {
    pub value: String,
    pub selected: bool,
}

/// Filter panel state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterView {
    pub sizes: Vec<FacetOptionView>,
    pub colors: Vec<FacetOptionView>,
    /// Whether the "reset filters" control should be shown.
    pub active: bool,
}

/// Header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItemView {
    pub page: Page,
    pub title: &'static str,
    pub current: bool,
}

/// Delivery tariff with prices formatted against the current cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOptionView {
    pub method: &'static str,
    pub area: String,
    pub lead_time: String,
    pub base_price: Option<String>,
    pub free_from: Option<String>,
    /// What this cart would pay; `None` when quoted at checkout.
    pub price_for_cart: Option<String>,
}

impl DeliveryOptionView {
    fn new(option: &DeliveryOption, subtotal: Price) -> Self {
        Self {
            method: option.method.title(),
            area: option.area.clone(),
            lead_time: option.lead_time(),
            base_price: option.base_price.as_ref().map(Price::to_string),
            free_from: option.free_from.as_ref().map(Price::to_string),
            price_for_cart: option.price_for(subtotal).as_ref().map(Price::to_string),
        }
    }
}

/// Body of the informational pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContentView {
    Payment {
        methods: Vec<PaymentMethod>,
    },
    Reviews {
        reviews: Vec<Review>,
        average_rating: Option<f64>,
    },
    Delivery {
        options: Vec<DeliveryOptionView>,
    },
}

impl PageContentView {
    /// Content for `page`, or `None` for pages that only show products or the cart.
    #[must_use]
    pub fn for_page(page: Page, content: &ContentStore, cart: &Cart) -> Option<Self> {
        match page {
            Page::Home | Page::Catalog | Page::Cart => None,
            Page::Payment => Some(Self::Payment {
                methods: content.payment_methods().to_vec(),
            }),
            Page::Reviews => Some(Self::Reviews {
                reviews: content.reviews().to_vec(),
                average_rating: content.average_rating(),
            }),
            Page::Delivery => {
                let subtotal = cart.totals().total_price;
                Some(Self::Delivery {
                    options: content
                        .delivery_options()
                        .iter()
                        .map(|option| DeliveryOptionView::new(option, subtotal))
                        .collect(),
                })
            }
        }
    }
}

/// Full snapshot of the store for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreView {
    pub page: Page,
    pub title: &'static str,
    pub nav: Vec<NavItemView>,
    pub featured: Vec<ProductCardView>,
    pub products: Vec<ProductCardView>,
    pub filters: FilterView,
    pub cart: CartView,
    /// Payment, reviews or delivery details on those pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<PageContentView>,
}

impl StoreView {
    /// Build a snapshot from the catalog, static content and current state.
    #[must_use]
    pub fn build(
        catalog: &Catalog,
        content: &ContentStore,
        state: &StoreState,
        featured_count: usize,
    ) -> Self {
        let filters = &state.filters;
        Self {
            page: state.page,
            title: state.page.title(),
            nav: Page::ALL
                .iter()
                .map(|&page| NavItemView {
                    page,
                    title: page.title(),
                    current: page == state.page,
                })
                .collect(),
            featured: catalog
                .featured(featured_count)
                .iter()
                .map(ProductCardView::from)
                .collect(),
            products: filters
                .apply(catalog.products())
                .into_iter()
                .map(ProductCardView::from)
                .collect(),
            filters: FilterView {
                sizes: catalog
                    .size_options()
                    .iter()
                    .map(|size| FacetOptionView {
                        value: size.to_string(),
                        selected: filters.sizes().contains(size),
                    })
                    .collect(),
                colors: catalog
                    .color_options()
                    .iter()
                    .map(|color| FacetOptionView {
                        value: color.to_string(),
                        selected: filters.colors().contains(color),
                    })
                    .collect(),
                active: filters.is_active(),
            },
            cart: CartView::from(&state.cart),
            content: PageContentView::for_page(state.page, content, &state.cart),
        }
    }
}
