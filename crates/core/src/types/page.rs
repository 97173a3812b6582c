//! Storefront pages.

use serde::{Deserialize, Serialize};

/// The view the storefront is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page with featured products.
    #[default]
    Home,
    /// Full catalog with the size/color filter panel.
    Catalog,
    /// Cart contents and totals.
    Cart,
    /// Accepted payment methods.
    Payment,
    /// Customer reviews.
    Reviews,
    /// Delivery options.
    Delivery,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Catalog,
        Self::Cart,
        Self::Payment,
        Self::Reviews,
        Self::Delivery,
    ];

    /// Navigation label.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::Cart => "Корзина",
            Self::Payment => "Оплата",
            Self::Reviews => "Отзывы",
            Self::Delivery => "Доставка",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_navigation_order_and_titles() {
        let titles: Vec<&str> = Page::ALL.iter().map(Page::title).collect();
        assert_eq!(
            titles,
            vec!["Главная", "Каталог", "Корзина", "Оплата", "Отзывы", "Доставка"]
        );
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Page::Delivery).unwrap(), r#""delivery""#);
        assert!(serde_json::from_str::<Page>(r#""checkout""#).is_err());
    }
}
