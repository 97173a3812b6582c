//! Type-safe price representation using decimal arithmetic.
//!
//! Prices carry their currency so that amounts in different currencies are
//! never summed by accident. The storefront trades in roubles, so
//! [`CurrencyCode::RUB`] is the default.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors produced by price arithmetic.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The two operands are in different currencies.
    #[error("cannot combine {left} and {right} amounts")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        left: CurrencyCode,
        /// Currency of the right-hand operand.
        right: CurrencyCode,
    },
    /// The result does not fit in a decimal amount.
    #[error("amount is out of range")]
    Overflow,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (roubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-rouble price.
    #[must_use]
    pub fn rub(amount: i64) -> Self {
        Self::new(Decimal::from(amount), CurrencyCode::RUB)
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Multiply by a quantity (line total).
    ///
    /// Saturates at the largest representable amount; use
    /// [`Price::checked_times`] where overflow must be detected.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }

    /// Multiply by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product is not representable.
    pub fn checked_times(self, quantity: u32) -> Result<Self, PriceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(PriceError::Overflow)
    }

    /// Add two prices of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::CurrencyMismatch`] if the currencies differ and
    /// [`PriceError::Overflow`] if the sum is not representable.
    pub fn checked_add(self, other: Self) -> Result<Self, PriceError> {
        if self.currency_code != other.currency_code {
            return Err(PriceError::CurrencyMismatch {
                left: self.currency_code,
                right: other.currency_code,
            });
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(PriceError::Overflow)
    }
}

/// Whole amounts render without decimals (`2990 ₽`), fractional ones with two.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.amount.fract().is_zero() {
            self.amount.trunc().to_string()
        } else {
            format!("{:.2}", self.amount)
        };
        let symbol = self.currency_code.symbol();
        match self.currency_code {
            CurrencyCode::RUB | CurrencyCode::EUR => write!(f, "{amount} {symbol}"),
            CurrencyCode::USD | CurrencyCode::GBP => write!(f, "{symbol}{amount}"),
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
