//! Product category tags.

use serde::{Deserialize, Serialize};

/// Category tag attached to every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// T-shirts, hoodies.
    Tops,
    /// Coats.
    Outerwear,
}
