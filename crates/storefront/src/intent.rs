//! User intents and the reducer that applies them.
//!
//! Every action the presentation layer can emit is one [`Intent`] variant, and
//! [`reduce`] maps each variant onto exactly one filter or cart operation.
//! The reducer never mutates its input: it returns the next state, or an error
//! and the caller keeps the previous state.

use onle_core::{Color, Page, ProductId, Size};
use serde::{Deserialize, Serialize};

use crate::cart::LineKey;
use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::state::StoreState;

/// A user action.
///
/// Serialised with an internal `type` tag, e.g.
/// `{"type": "add_to_cart", "product_id": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Switch the visible page.
    Navigate { page: Page },
    /// Tick or untick a size in the filter panel.
    ToggleSize { size: Size },
    /// Tick or untick a color in the filter panel.
    ToggleColor { color: Color },
    /// Clear the filter panel.
    ResetFilters,
    /// Add one unit; size/color default to the product's first listed values.
    AddToCart {
        product_id: ProductId,
        #[serde(default)]
        size: Option<Size>,
        #[serde(default)]
        color: Option<Color>,
    },
    /// Set a line's quantity; zero removes it.
    UpdateQuantity {
        product_id: ProductId,
        size: Size,
        color: Color,
        quantity: i64,
    },
    /// Remove a line.
    RemoveFromCart {
        product_id: ProductId,
        size: Size,
        color: Color,
    },
}

impl Intent {
    /// Tag name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Navigate { .. } => "navigate",
            Self::ToggleSize { .. } => "toggle_size",
            Self::ToggleColor { .. } => "toggle_color",
            Self::ResetFilters => "reset_filters",
            Self::AddToCart { .. } => "add_to_cart",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::RemoveFromCart { .. } => "remove_from_cart",
        }
    }
}

/// Apply an intent to a state, producing the next state.
///
/// # Errors
///
/// Returns [`StoreError::UnknownProduct`] if an add names a product that is
/// not in the catalog, or [`StoreError::Cart`] if the cart rejects the
/// operation. `state` is left untouched either way.
pub fn reduce(catalog: &Catalog, state: &StoreState, intent: Intent) -> Result<StoreState> {
    let mut next = state.clone();
    match intent {
        Intent::Navigate { page } => next.page = page,
        Intent::ToggleSize { size } => {
            next.filters.toggle_size(size);
        }
        Intent::ToggleColor { color } => {
            next.filters.toggle_color(color);
        }
        Intent::ResetFilters => next.filters.clear(),
        Intent::AddToCart {
            product_id,
            size,
            color,
        } => {
            let product = catalog
                .get(product_id)
                .ok_or(StoreError::UnknownProduct(product_id))?;
            next.cart.add(product, size, color)?;
        }
        Intent::UpdateQuantity {
            product_id,
            size,
            color,
            quantity,
        } => {
            next.cart
                .update_quantity(&LineKey::new(product_id, size, color), quantity)?;
        }
        Intent::RemoveFromCart {
            product_id,
            size,
            color,
        } => {
            next.cart.remove(&LineKey::new(product_id, size, color));
        }
    }
    Ok(next)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartError;
    use crate::test_support::{color, size};

    fn catalog() -> Catalog {
        Catalog::seeded().unwrap()
    }

    #[test]
    fn test_navigate() {
        let state = StoreState::default();
        let next = reduce(
            &catalog(),
            &state,
            Intent::Navigate {
                page: Page::Catalog,
            },
        )
        .unwrap();
        assert_eq!(next.page, Page::Catalog);
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn test_toggle_and_reset_filters() {
        let catalog = catalog();
        let state = StoreState::default();
        let state = reduce(&catalog, &state, Intent::ToggleSize { size: size("M") }).unwrap();
        let state = reduce(
            &catalog,
            &state,
            Intent::ToggleColor {
                color: color("Черный"),
            },
        )
        .unwrap();
        assert!(state.filters.sizes().contains(&size("M")));
        assert!(state.filters.colors().contains(&color("Черный")));

        let state = reduce(&catalog, &state, Intent::ResetFilters).unwrap();
        assert!(!state.filters.is_active());
    }

    #[test]
    fn test_add_to_cart_uses_defaults() {
        let state = reduce(
            &catalog(),
            &StoreState::default(),
            Intent::AddToCart {
                product_id: ProductId::new(3),
                size: None,
                color: None,
            },
        )
        .unwrap();

        let line = state.cart.lines().first().unwrap();
        assert_eq!(line.selected_size, size("S"));
        assert_eq!(line.selected_color, color("Бежевый"));
    }

    #[test]
    fn test_add_unknown_product() {
        let state = StoreState::default();
        let err = reduce(
            &catalog(),
            &state,
            Intent::AddToCart {
                product_id: ProductId::new(404),
                size: None,
                color: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::UnknownProduct(id) if id == ProductId::new(404)));
    }

    #[test]
    fn test_rejected_intent_leaves_state_untouched() {
        let catalog = catalog();
        let state = reduce(
            &catalog,
            &StoreState::default(),
            Intent::AddToCart {
                product_id: ProductId::new(1),
                size: None,
                color: None,
            },
        )
        .unwrap();

        let err = reduce(
            &catalog,
            &state,
            Intent::UpdateQuantity {
                product_id: ProductId::new(1),
                size: size("XS"),
                color: color("Черный"),
                quantity: -2,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Cart(CartError::NegativeQuantity(-2))
        ));
        assert_eq!(state.cart.totals().item_count, 1);
    }

    #[test]
    fn test_intent_json_shape() {
        let intent: Intent =
            serde_json::from_str(r#"{"type": "add_to_cart", "product_id": 1}"#).unwrap();
        assert_eq!(
            intent,
            Intent::AddToCart {
                product_id: ProductId::new(1),
                size: None,
                color: None,
            }
        );

        let intent: Intent = serde_json::from_str(
            r#"{"type": "update_quantity", "product_id": 2, "size": "M", "color": "Серый", "quantity": 4}"#,
        )
        .unwrap();
        assert_eq!(intent.name(), "update_quantity");

        let json = serde_json::to_string(&Intent::ResetFilters).unwrap();
        assert_eq!(json, r#"{"type":"reset_filters"}"#);
    }

    #[test]
    fn test_intent_rejects_invalid_option_value() {
        let result = serde_json::from_str::<Intent>(r#"{"type": "toggle_size", "size": ""}"#);
        assert!(result.is_err());
    }
}
