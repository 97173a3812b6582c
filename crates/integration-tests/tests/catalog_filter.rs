//! Facet filtering over the seed catalog.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use onle_integration_tests::{color, size, storefront, visible_ids};
use onle_storefront::{Catalog, Intent, Product, filter};

fn ids(products: &[&Product]) -> Vec<i32> {
    products.iter().map(|p| p.id.as_i32()).collect()
}

#[test]
fn test_empty_selection_shows_everything() {
    let store = storefront();
    assert_eq!(visible_ids(&store), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_sizes_or_within_facet() {
    let mut store = storefront();
    store
        .dispatch(Intent::ToggleSize { size: size("XS") })
        .unwrap();
    assert_eq!(visible_ids(&store), vec![1, 4]);

    store
        .dispatch(Intent::ToggleSize { size: size("XXL") })
        .unwrap();
    // XXL only adds product 4, which XS already matched.
    assert_eq!(visible_ids(&store), vec![1, 4]);
}

#[test]
fn test_facets_and_across() {
    let mut store = storefront();
    store
        .dispatch(Intent::ToggleSize { size: size("S") })
        .unwrap();
    store
        .dispatch(Intent::ToggleColor {
            color: color("Бежевый"),
        })
        .unwrap();
    assert_eq!(visible_ids(&store), vec![3, 4, 6]);

    store
        .dispatch(Intent::ToggleColor {
            color: color("Синий"),
        })
        .unwrap();
    assert_eq!(visible_ids(&store), vec![2, 3, 4, 6]);
}

#[test]
fn test_toggle_twice_and_reset() {
    let mut store = storefront();
    store
        .dispatch(Intent::ToggleColor {
            color: color("Синий"),
        })
        .unwrap();
    assert_eq!(visible_ids(&store), vec![2]);

    store
        .dispatch(Intent::ToggleColor {
            color: color("Синий"),
        })
        .unwrap();
    assert_eq!(visible_ids(&store).len(), 6);

    store
        .dispatch(Intent::ToggleSize { size: size("XXL") })
        .unwrap();
    store.dispatch(Intent::ResetFilters).unwrap();
    assert!(!store.state().filters.is_active());
    assert_eq!(visible_ids(&store).len(), 6);
}

#[test]
fn test_unmatched_selection_is_empty() {
    let mut store = storefront();
    store
        .dispatch(Intent::ToggleSize { size: size("XXL") })
        .unwrap();
    store
        .dispatch(Intent::ToggleColor {
            color: color("Синий"),
        })
        .unwrap();
    assert!(visible_ids(&store).is_empty());
}

#[test]
fn test_free_filter_on_custom_catalog() {
    let feed = r#"{
        "size_options": ["M", "XL"],
        "color_options": ["Black"],
        "products": [
            {"id": 10, "name": "A", "price": {"amount": "100", "currency_code": "RUB"},
             "image": "a.jpg", "sizes": ["M"], "colors": ["Black"], "category": "tops"},
            {"id": 11, "name": "B", "price": {"amount": "200", "currency_code": "RUB"},
             "image": "b.jpg", "sizes": ["L"], "colors": ["Black"], "category": "tops"},
            {"id": 12, "name": "C", "price": {"amount": "300", "currency_code": "RUB"},
             "image": "c.jpg", "sizes": ["XL"], "colors": ["Black"], "category": "outerwear"}
        ]
    }"#;
    let catalog = Catalog::from_json(feed).unwrap();
    let none = BTreeSet::new();

    let m: BTreeSet<_> = [size("M")].into_iter().collect();
    assert_eq!(ids(&filter(catalog.products(), &m, &none)), vec![10]);

    let m_xl: BTreeSet<_> = [size("M"), size("XL")].into_iter().collect();
    assert_eq!(ids(&filter(catalog.products(), &m_xl, &none)), vec![10, 12]);
}

#[test]
fn test_store_view_lists_filtered_products() {
    let mut store = storefront();
    store
        .dispatch(Intent::ToggleSize { size: size("XS") })
        .unwrap();
    let view = serde_json::to_value(store.view()).unwrap();

    let products = view["products"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(view["filters"]["active"], true);
    assert_eq!(view["featured"].as_array().unwrap().len(), 3);
}
