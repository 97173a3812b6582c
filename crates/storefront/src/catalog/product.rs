//! Catalog product record.

use onle_core::{Category, Color, Price, ProductId, Size};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A product in the store.
///
/// Products are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Previous price, shown struck through when the product is discounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Image URL.
    pub image: String,
    /// Available sizes, in display order.
    pub sizes: Vec<Size>,
    /// Available colors, in display order.
    pub colors: Vec<Color>,
    /// Category tag.
    pub category: Category,
}

impl Product {
    /// Returns `true` if the product can be put in a cart, i.e. it lists at
    /// least one size and one color.
    #[must_use]
    pub fn is_offered(&self) -> bool {
        !self.sizes.is_empty() && !self.colors.is_empty()
    }

    /// The size used when the caller does not pick one (first listed).
    #[must_use]
    pub fn default_size(&self) -> Option<&Size> {
        self.sizes.first()
    }

    /// The color used when the caller does not pick one (first listed).
    #[must_use]
    pub fn default_color(&self) -> Option<&Color> {
        self.colors.first()
    }

    #[must_use]
    pub fn offers_size(&self, size: &Size) -> bool {
        self.sizes.contains(size)
    }

    #[must_use]
    pub fn offers_color(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Percentage saved against the previous price, rounded down.
    ///
    /// Returns `None` when there is no previous price, when it is not higher
    /// than the current price, or when the two are in different currencies.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price?;
        if old.currency_code != self.price.currency_code || old.amount <= self.price.amount {
            return None;
        }
        ((old.amount - self.price.amount) * Decimal::ONE_HUNDRED / old.amount)
            .floor()
            .to_u32()
    }
}
