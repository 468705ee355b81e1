//! Order aggregate and line items

use super::status::OrderStatus;
use crate::util::now_millis;
use serde::{Deserialize, Serialize};

/// One (sku, quantity) pair within an order
///
/// Invariant: `qty > 0` at all times. A mutation that would drive the
/// quantity to zero or below removes the line entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub sku: String,
    pub qty: i32,
}

/// Order aggregate
///
/// Owns its line items exclusively. Lines are unique by sku and keep
/// insertion order. Created in status OPEN; mutated only through the
/// engine's operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Opaque unique id (assigned at creation)
    pub id: String,
    /// Table identifier
    pub table: String,
    /// Server (waiter) identifier
    pub server: String,
    pub status: OrderStatus,
    /// Optional coupon code, resolved at billing time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    pub items: Vec<LineItem>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

impl Order {
    /// Create a new open order with an empty item list
    pub fn new(
        id: impl Into<String>,
        table: impl Into<String>,
        server: impl Into<String>,
        coupon: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            table: table.into(),
            server: server.into(),
            status: OrderStatus::Open,
            coupon,
            items: Vec::new(),
            created_at: now_millis(),
        }
    }

    /// Find the line for a sku, if any
    pub fn line(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|l| l.sku == sku)
    }

    /// Merge a quantity into the line for `sku`, appending a new line if
    /// none exists. Caller validates that `qty` is positive, that the
    /// sku resolves in the catalog, and that the merged quantity stays
    /// within the engine's per-line maximum.
    pub fn merge_item(&mut self, sku: &str, qty: i32) {
        match self.items.iter_mut().find(|l| l.sku == sku) {
            Some(line) => line.qty += qty,
            None => self.items.push(LineItem {
                sku: sku.to_string(),
                qty,
            }),
        }
    }

    /// Decrement the line for `sku` by `qty`, deleting it once the
    /// quantity drops to zero or below. Returns whether the order was
    /// modified; an absent sku is a no-op.
    pub fn decrement_item(&mut self, sku: &str, qty: i32) -> bool {
        let Some(idx) = self.items.iter().position(|l| l.sku == sku) else {
            return false;
        };
        self.items[idx].qty -= qty;
        if self.items[idx].qty <= 0 {
            self.items.remove(idx);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_open_and_empty() {
        let order = Order::new("ORD-1", "12", "Mariam", None);
        assert_eq!(order.status, OrderStatus::Open);
        assert!(order.items.is_empty());
        assert!(order.created_at > 0);
    }

    #[test]
    fn test_merge_item_merges_by_sku() {
        let mut order = Order::new("ORD-1", "12", "Mariam", None);
        order.merge_item("PZ02", 2);
        order.merge_item("DR01", 1);
        order.merge_item("PZ02", 1);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.line("PZ02").unwrap().qty, 3);
        // insertion order preserved
        assert_eq!(order.items[0].sku, "PZ02");
        assert_eq!(order.items[1].sku, "DR01");
    }

    #[test]
    fn test_decrement_item_deletes_at_zero() {
        let mut order = Order::new("ORD-1", "12", "Mariam", None);
        order.merge_item("DR01", 3);
        assert!(order.decrement_item("DR01", 1));
        assert_eq!(order.line("DR01").unwrap().qty, 2);
        assert!(order.decrement_item("DR01", 2));
        assert!(order.line("DR01").is_none());
    }

    #[test]
    fn test_decrement_absent_sku_is_noop() {
        let mut order = Order::new("ORD-1", "12", "Mariam", None);
        order.merge_item("PZ02", 1);
        let before = order.clone();
        assert!(!order.decrement_item("DS01", 1));
        assert_eq!(order, before);
    }
}
