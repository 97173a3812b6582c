//! Static informational content: payment methods, reviews and delivery.
//!
//! The content is compiled in from `content/info.json` and loaded once,
//! like the product catalog.

use std::fmt;
use std::sync::Arc;

use onle_core::Price;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SEED_CONTENT: &str = include_str!("../content/info.json");

/// Highest rating a review may carry.
pub const MAX_RATING: u8 = 5;

/// Content loading errors.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("review by {author} has rating {rating}, expected 1-5")]
    InvalidRating { author: String, rating: u8 },
}

/// How the shopper pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    BankCard,
    Sbp,
    OnDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub kind: PaymentKind,
    pub title: String,
    pub description: String,
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to [`MAX_RATING`] stars.
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Courier,
    PickupPoint,
    RussianPost,
}

impl DeliveryMethod {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Courier => "Курьерская доставка",
            Self::PickupPoint => "Пункты выдачи",
            Self::RussianPost => "Почта России",
        }
    }
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One delivery tariff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub method: DeliveryMethod,
    /// Where the tariff applies.
    pub area: String,
    pub min_days: u32,
    pub max_days: u32,
    /// Starting price; `None` when the price is quoted at checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Price>,
    /// Subtotal at which delivery becomes free.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_from: Option<Price>,
}

impl DeliveryOption {
    /// Delivery price for an order with the given subtotal.
    ///
    /// Zero once the subtotal reaches the free-delivery threshold (in the same
    /// currency), otherwise the base price.
    #[must_use]
    pub fn price_for(&self, subtotal: Price) -> Option<Price> {
        let is_free = self.free_from.is_some_and(|threshold| {
            threshold.currency_code == subtotal.currency_code
                && subtotal.amount >= threshold.amount
        });
        if is_free {
            Some(Price::zero(subtotal.currency_code))
        } else {
            self.base_price
        }
    }

    /// Lead time such as `"1-2 дн."`.
    #[must_use]
    pub fn lead_time(&self) -> String {
        if self.min_days == self.max_days {
            format!("{} дн.", self.min_days)
        } else {
            format!("{}-{} дн.", self.min_days, self.max_days)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    payment_methods: Vec<PaymentMethod>,
    reviews: Vec<Review>,
    delivery_options: Vec<DeliveryOption>,
}

/// Content store that holds the informational pages in memory.
///
/// The default store is empty.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    payment_methods: Arc<Vec<PaymentMethod>>,
    reviews: Arc<Vec<Review>>,
    delivery_options: Arc<Vec<DeliveryOption>>,
}

impl ContentStore {
    /// Parse content from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a rating is out of range.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json)?;

        if let Some(review) = file
            .reviews
            .iter()
            .find(|r| r.rating == 0 || r.rating > MAX_RATING)
        {
            return Err(ContentError::InvalidRating {
                author: review.author.clone(),
                rating: review.rating,
            });
        }

        tracing::debug!(
            payment_methods = file.payment_methods.len(),
            reviews = file.reviews.len(),
            delivery_options = file.delivery_options.len(),
            "Loaded content"
        );

        Ok(Self {
            payment_methods: Arc::new(file.payment_methods),
            reviews: Arc::new(file.reviews),
            delivery_options: Arc::new(file.delivery_options),
        })
    }

    /// Load the compiled-in content.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file is malformed.
    pub fn seeded() -> Result<Self, ContentError> {
        Self::from_json(SEED_CONTENT)
    }

    #[must_use]
    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn delivery_options(&self) -> &[DeliveryOption] {
        &self.delivery_options
    }

    /// Mean review rating, or `None` without reviews.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        let count = u32::try_from(self.reviews.len()).ok().filter(|&n| n > 0)?;
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / f64::from(count))
    }
}
