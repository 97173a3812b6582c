//! ONLE storefront library.
//!
//! Catalog filtering, the shopping cart and the intent reducer that ties them
//! together. The crate is headless: a presentation layer reads [`StoreView`]
//! snapshots and sends [`Intent`]s back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod intent;
pub mod state;
pub mod telemetry;
pub mod view;

pub use cart::{Cart, CartError, CartLine, CartTotals, LineKey};
pub use catalog::{Catalog, CatalogError, Product};
pub use config::{ConfigError, LogFormat, StorefrontConfig};
pub use content::{ContentError, ContentStore};
pub use error::{Result, StoreError};
pub use filter::{FilterSelection, filter};
pub use intent::{Intent, reduce};
pub use state::{StoreState, Storefront};
pub use view::StoreView;
