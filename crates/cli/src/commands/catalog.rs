//! Catalog listing.
//!
//! Applies the size/color filter to the seed catalog and prints the matching
//! products as a JSON array of product cards.

use std::collections::BTreeSet;
use std::io::{self, Write};

use onle_core::{Color, Size};
use onle_storefront::view::ProductCardView;
use onle_storefront::{Catalog, CatalogError, filter};
use thiserror::Error;

/// Errors that can occur while listing the catalog.
#[derive(Debug, Error)]
pub enum CatalogCommandError {
    /// The bundled catalog failed to load.
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Output could not be serialized or written.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Print the filtered seed catalog to stdout.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout is closed.
pub fn list(sizes: Vec<Size>, colors: Vec<Color>) -> Result<(), CatalogCommandError> {
    let catalog = Catalog::seeded()?;
    let stdout = io::stdout();
    let shown = write_catalog(&catalog, sizes, colors, stdout.lock())?;
    tracing::info!(shown, total = catalog.len(), "Listed catalog");
    Ok(())
}

/// Write matching products as pretty JSON; returns how many matched.
fn write_catalog(
    catalog: &Catalog,
    sizes: Vec<Size>,
    colors: Vec<Color>,
    mut out: impl Write,
) -> Result<usize, CatalogCommandError> {
    let sizes: BTreeSet<Size> = sizes.into_iter().collect();
    let colors: BTreeSet<Color> = colors.into_iter().collect();

    let cards: Vec<ProductCardView> = filter(catalog.products(), &sizes, &colors)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    serde_json::to_writer_pretty(&mut out, &cards)?;
    writeln!(out)?;
    Ok(cards.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn run(sizes: &[&str], colors: &[&str]) -> (usize, serde_json::Value) {
        let catalog = Catalog::seeded().unwrap();
        let mut out = Vec::new();
        let shown = write_catalog(
            &catalog,
            sizes.iter().map(|s| s.parse().unwrap()).collect(),
            colors.iter().map(|c| c.parse().unwrap()).collect(),
            &mut out,
        )
        .unwrap();
        (shown, serde_json::from_slice(&out).unwrap())
    }

    fn ids(json: &serde_json::Value) -> Vec<i64> {
        json.as_array()
            .unwrap()
            .iter()
            .map(|card| card["id"].as_i64().unwrap())
            .collect()
    }

    #[test]
    fn test_unfiltered_lists_everything() {
        let (shown, json) = run(&[], &[]);
        assert_eq!(shown, 6);
        assert_eq!(ids(&json), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sizes_and_colors_combine() {
        let (shown, json) = run(&["XS", "XXL"], &["Белый"]);
        assert_eq!(shown, 2);
        assert_eq!(ids(&json), vec![1, 4]);

        let (_, json) = run(&["XXL"], &["Синий"]);
        assert!(ids(&json).is_empty());
    }

    #[test]
    fn test_cards_carry_formatted_prices() {
        let (_, json) = run(&["XS"], &["Серый"]);
        let first = &json[0];
        assert_eq!(first["price"], "2990 ₽");
        assert_eq!(first["discount_percent"], 25);
    }
}
