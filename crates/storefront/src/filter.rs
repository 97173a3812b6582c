//! Catalog filtering by size and color.
//!
//! Each facet is an OR-membership test: a product passes if it lists at least
//! one of the selected values, and an empty selection passes everything. The
//! two facets are combined with AND.

use std::collections::BTreeSet;

use onle_core::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// The sizes and colors the shopper has ticked in the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    sizes: BTreeSet<Size>,
    colors: BTreeSet<Color>,
}

impl FilterSelection {
    /// Create a selection from explicit values.
    #[must_use]
    pub fn new(
        sizes: impl IntoIterator<Item = Size>,
        colors: impl IntoIterator<Item = Color>,
    ) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            colors: colors.into_iter().collect(),
        }
    }

    /// Tick or untick a size. Returns `true` if the size is now selected.
    pub fn toggle_size(&mut self, size: Size) -> bool {
        toggle(&mut self.sizes, size)
    }

    /// Tick or untick a color. Returns `true` if the color is now selected.
    pub fn toggle_color(&mut self, color: Color) -> bool {
        toggle(&mut self.colors, color)
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.sizes.clear();
        self.colors.clear();
    }

    /// Returns `true` if any facet restricts the product list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.sizes.is_empty() || !self.colors.is_empty()
    }

    #[must_use]
    pub const fn sizes(&self) -> &BTreeSet<Size> {
        &self.sizes
    }

    #[must_use]
    pub const fn colors(&self) -> &BTreeSet<Color> {
        &self.colors
    }

    /// Returns `true` if the product passes both facets.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        facet_matches(&product.sizes, &self.sizes) && facet_matches(&product.colors, &self.colors)
    }

    /// Apply this selection to a product list.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter(products, &self.sizes, &self.colors)
    }
}

/// Products matching the selected sizes and colors, in their original order.
#[must_use]
pub fn filter<'a>(
    products: &'a [Product],
    selected_sizes: &BTreeSet<Size>,
    selected_colors: &BTreeSet<Color>,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| facet_matches(&p.sizes, selected_sizes))
        .filter(|p| facet_matches(&p.colors, selected_colors))
        .collect()
}

fn facet_matches<T: Ord>(offered: &[T], selected: &BTreeSet<T>) -> bool {
    selected.is_empty() || offered.iter().any(|value| selected.contains(value))
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}
