//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Pizza,
    Salad,
    Drink,
    Dessert,
}

impl Category {
    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pizza => "pizza",
            Self::Salad => "salad",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Menu item entity
///
/// Loaded once at startup and read-only for the lifetime of the process.
/// `sku` is the unique catalog key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub sku: String,
    pub name: String,
    /// Unit price (non-negative)
    pub price: Decimal,
    pub category: Category,
}

impl MenuItem {
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: Category,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            price,
            category,
        }
    }
}
