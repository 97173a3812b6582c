//! Core types for the ONLE storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod option_value;
pub mod page;
pub mod price;

pub use category::Category;
pub use id::*;
pub use option_value::{Color, Size, ValueError};
pub use page::Page;
pub use price::{CurrencyCode, Price, PriceError};
