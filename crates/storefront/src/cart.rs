//! In-memory shopping cart.
//!
//! A cart is an ordered list of [`CartLine`]s. Each line is identified by its
//! [`LineKey`] (product, size, color); adding the same combination again bumps
//! the existing line instead of creating a second one. Totals are always
//! derived from the lines and never stored.
//!
//! Every mutator validates before touching the lines, so a failed call leaves
//! the cart exactly as it was.

use core::fmt;

use onle_core::{Color, CurrencyCode, Price, PriceError, ProductId, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Product;

/// Errors returned by cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested size is not listed on the product.
    #[error("product {product_id} is not available in size {size}")]
    SizeNotOffered { product_id: ProductId, size: Size },

    /// The requested color is not listed on the product.
    #[error("product {product_id} is not available in color {color}")]
    ColorNotOffered { product_id: ProductId, color: Color },

    /// No size/color was given and the product lists none to default to.
    #[error("product {0} has no sizes or colors on offer")]
    NotOffered(ProductId),

    /// Quantities must be zero or positive.
    #[error("quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    /// The quantity does not fit in a cart line, or the cart total would
    /// no longer be representable.
    #[error("quantity is too large")]
    QuantityOverflow,

    /// The product is priced in a different currency than the cart.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: Size,
    pub color: Color,
}

impl LineKey {
    #[must_use]
    pub const fn new(product_id: ProductId, size: Size, color: Color) -> Self {
        Self {
            product_id,
            size,
            color,
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.product_id, self.size, self.color)
    }
}

/// One product/size/color combination and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
    pub selected_size: Size,
    pub selected_color: Color,
}

impl CartLine {
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey::new(
            self.product.id,
            self.selected_size.clone(),
            self.selected_color.clone(),
        )
    }

    /// Returns `true` if this line has the given identity.
    #[must_use]
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product.id == key.product_id
            && self.selected_size == key.size
            && self.selected_color == key.color
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Σ price × quantity.
    pub total_price: Price,
    /// Σ quantity.
    pub item_count: u64,
}

/// A shopping cart.
///
/// Only serialised: lines can be built only through the mutators, which keep
/// keys unique, quantities positive and the total representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    currency_code: CurrencyCode,
    lines: Vec<CartLine>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

impl Cart {
    /// Create an empty cart trading in the given currency.
    #[must_use]
    pub const fn new(currency_code: CurrencyCode) -> Self {
        Self {
            currency_code,
            lines: Vec::new(),
        }
    }

    /// Add one unit of a product.
    ///
    /// `None` for size or color falls back to the product's first listed
    /// value. If a line with the resolved key exists its quantity goes up by
    /// one, otherwise a new line with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// - [`CartError::SizeNotOffered`] / [`CartError::ColorNotOffered`] if an
    ///   explicit value is not listed on the product
    /// - [`CartError::NotOffered`] if a default is needed but the product has none
    /// - [`CartError::Price`] if the product is priced in another currency
    /// - [`CartError::QuantityOverflow`] if the line is already at the maximum
    pub fn add(
        &mut self,
        product: &Product,
        size: Option<Size>,
        color: Option<Color>,
    ) -> Result<LineKey, CartError> {
        let size = match size {
            Some(size) if product.offers_size(&size) => size,
            Some(size) => {
                return Err(CartError::SizeNotOffered {
                    product_id: product.id,
                    size,
                });
            }
            None => product
                .default_size()
                .cloned()
                .ok_or(CartError::NotOffered(product.id))?,
        };
        let color = match color {
            Some(color) if product.offers_color(&color) => color,
            Some(color) => {
                return Err(CartError::ColorNotOffered {
                    product_id: product.id,
                    color,
                });
            }
            None => product
                .default_color()
                .cloned()
                .ok_or(CartError::NotOffered(product.id))?,
        };
        if product.price.currency_code != self.currency_code {
            return Err(PriceError::CurrencyMismatch {
                left: self.currency_code,
                right: product.price.currency_code,
            }
            .into());
        }

        let key = LineKey::new(product.id, size, color);
        let (unit_price, quantity) = match self.get(&key) {
            Some(line) => (
                line.product.price,
                line.quantity
                    .checked_add(1)
                    .ok_or(CartError::QuantityOverflow)?,
            ),
            None => (product.price, 1),
        };
        self.checked_total_with(&key, unit_price, quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(&key)) {
            line.quantity = quantity;
            debug!(line = %key, quantity, "Incremented cart line");
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
                selected_size: key.size.clone(),
                selected_color: key.color.clone(),
            });
            debug!(line = %key, "Added cart line");
        }
        Ok(key)
    }

    /// Set the quantity of an existing line. Zero removes the line.
    ///
    /// Updating a line that is not in the cart does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NegativeQuantity`] for negative values and
    /// [`CartError::QuantityOverflow`] for values above `u32::MAX` or when the
    /// cart total would overflow.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: i64) -> Result<(), CartError> {
        if quantity < 0 {
            return Err(CartError::NegativeQuantity(quantity));
        }
        if quantity == 0 {
            self.remove(key);
            return Ok(());
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::QuantityOverflow)?;

        let Some(unit_price) = self.get(key).map(|l| l.product.price) else {
            debug!(line = %key, "Quantity update for missing cart line ignored");
            return Ok(());
        };
        self.checked_total_with(key, unit_price, quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(key)) {
            line.quantity = quantity;
            debug!(line = %key, quantity, "Updated cart line quantity");
        }
        Ok(())
    }

    /// Remove a line. Returns `true` if a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !l.matches(key));
        let removed = self.lines.len() != before;
        if removed {
            debug!(line = %key, "Removed cart line");
        }
        removed
    }

    /// Cart total as if the line for `key` held `quantity` units at `unit_price`.
    fn checked_total_with(
        &self,
        key: &LineKey,
        unit_price: Price,
        quantity: u32,
    ) -> Result<Price, CartError> {
        let mut total = unit_price.checked_times(quantity).map_err(overflow)?;
        for line in self.lines.iter().filter(|l| !l.matches(key)) {
            let line_total = line
                .product
                .price
                .checked_times(line.quantity)
                .map_err(overflow)?;
            total = total.checked_add(line_total).map_err(overflow)?;
        }
        Ok(total)
    }

    /// Total price and item count over the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        // Mutators reject changes whose total overflows, so nothing saturates here.
        self.lines.iter().fold(
            CartTotals {
                total_price: Price::zero(self.currency_code),
                item_count: 0,
            },
            |acc, line| CartTotals {
                total_price: Price::new(
                    acc.total_price
                        .amount
                        .saturating_add(line.line_total().amount),
                    self.currency_code,
                ),
                item_count: acc.item_count + u64::from(line.quantity),
            },
        )
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.matches(key))
    }

    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

fn overflow(err: PriceError) -> CartError {
    match err {
        PriceError::Overflow => CartError::QuantityOverflow,
        other @ PriceError::CurrencyMismatch { .. } => other.into(),
    }
}
