//! Menu catalog - static SKU lookup
//!
//! The catalog is loaded once at startup and read-only for the lifetime
//! of the process. A missing sku is a normal, checked outcome, never an
//! error.

use shared::models::MenuItem;
use std::collections::HashMap;

/// Read-only mapping of sku → [`MenuItem`]
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: HashMap<String, MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from a flat item list; a duplicated sku keeps the
    /// last occurrence
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.sku.clone(), item))
                .collect(),
        }
    }

    /// Look up a menu item by sku
    pub fn lookup(&self, sku: &str) -> Option<&MenuItem> {
        self.items.get(sku)
    }

    /// Whether the sku resolves in this catalog
    pub fn contains(&self, sku: &str) -> bool {
        self.items.contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::Category;

    #[test]
    fn test_lookup_present_and_absent() {
        let catalog = MenuCatalog::from_items([MenuItem::new(
            "PZ01",
            "Margherita Pizza",
            Decimal::from(65),
            Category::Pizza,
        )]);
        assert_eq!(catalog.lookup("PZ01").unwrap().name, "Margherita Pizza");
        assert!(catalog.lookup("PZ99").is_none());
        assert!(catalog.contains("PZ01"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_sku_keeps_last() {
        let catalog = MenuCatalog::from_items([
            MenuItem::new("DR01", "Lemon Juice", Decimal::from(18), Category::Drink),
            MenuItem::new("DR01", "Fresh Lemon Juice", Decimal::from(20), Category::Drink),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("DR01").unwrap().price, Decimal::from(20));
    }
}
