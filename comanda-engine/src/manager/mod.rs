//! OrdersManager - caller-owned context for the order lifecycle
//!
//! The manager owns all mutable state the engine needs: the live order
//! store, the kitchen queue, and the archive of closed orders. There is
//! no ambient global state; callers construct a manager at startup and
//! pass it by reference into each operation.
//!
//! # Operation Flow
//!
//! ```text
//! create_order(table, server, coupon)
//!     ├─ add_item / remove_item       (catalog-validated mutation)
//!     ├─ compute_totals / order_report (read-only billing)
//!     ├─ send_to_kitchen               (transition + ticket push)
//!     ├─ mark_served                   (transition + ticket pop)
//!     ├─ transition(PAID / CANCELLED)
//!     └─ archive_closed                (drain terminal orders)
//! ```
//!
//! Each mutation is a critical section: the store and queue sit behind
//! `parking_lot::RwLock`, so the manager stays correct if callers ever
//! become concurrent. Locks are acquired in store → queue order.

mod error;

pub use error::OrderError;

use crate::catalog::MenuCatalog;
use crate::config::BillingConfig;
use crate::discount::CouponBook;
use crate::kitchen::{project_ticket, KitchenQueue};
use crate::money::{compute_totals, TotalsOutcome, MAX_QUANTITY};
use crate::report::{
    items_in_category, order_report, sales_by_category, CategoryLine, CategorySales, OrderReport,
};
use parking_lot::RwLock;
use shared::models::Category;
use shared::order::{KitchenTicket, Order, OrderStatus};
use shared::util::order_id;
use std::collections::HashMap;

/// Order lifecycle manager
///
/// Owns the catalog, coupon book, billing configuration, live order
/// store, kitchen queue, and archive.
pub struct OrdersManager {
    catalog: MenuCatalog,
    coupons: CouponBook,
    config: BillingConfig,
    orders: RwLock<HashMap<String, Order>>,
    kitchen: RwLock<KitchenQueue>,
    archive: RwLock<Vec<Order>>,
}

impl OrdersManager {
    /// Create a manager with the stock coupon book and default billing
    /// configuration
    pub fn new(catalog: MenuCatalog) -> Self {
        Self::with_parts(catalog, CouponBook::with_defaults(), BillingConfig::default())
    }

    /// Create a manager with an explicit coupon book and billing
    /// configuration
    pub fn with_parts(catalog: MenuCatalog, coupons: CouponBook, config: BillingConfig) -> Self {
        Self {
            catalog,
            coupons,
            config,
            orders: RwLock::new(HashMap::new()),
            kitchen: RwLock::new(KitchenQueue::new()),
            archive: RwLock::new(Vec::new()),
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    // ==================== Order lifecycle ====================

    /// Create a new open order and return its id
    pub fn create_order(
        &self,
        table: impl Into<String>,
        server: impl Into<String>,
        coupon: Option<String>,
    ) -> String {
        let mut order = Order::new(order_id(), table, server, coupon);
        let mut orders = self.orders.write();
        // snowflake ids collide only within the same millisecond; retry
        // until the id is actually free rather than overwrite a live order
        while orders.contains_key(&order.id) {
            order.id = order_id();
        }
        let id = order.id.clone();
        tracing::info!(order_id = %id, table = %order.table, "order created");
        orders.insert(id.clone(), order);
        id
    }

    /// Snapshot of a live order
    pub fn get_order(&self, order_id: &str) -> Result<Order, OrderError> {
        self.orders
            .read()
            .get(order_id)
            .cloned()
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// Add `qty` of `sku` to an order, merging into an existing line
    ///
    /// Fails with [`OrderError::UnknownSku`] when the sku is absent from
    /// the catalog, [`OrderError::InvalidQuantity`] for a non-positive
    /// quantity, and [`OrderError::QuantityTooLarge`] when the merged
    /// line would exceed [`MAX_QUANTITY`]; the order is left unmodified
    /// on failure.
    pub fn add_item(&self, order_id: &str, sku: &str, qty: i32) -> Result<(), OrderError> {
        if qty <= 0 {
            return Err(OrderError::InvalidQuantity(qty));
        }
        if qty > MAX_QUANTITY {
            return Err(OrderError::QuantityTooLarge {
                qty,
                max: MAX_QUANTITY,
            });
        }
        if !self.catalog.contains(sku) {
            return Err(OrderError::UnknownSku(sku.to_string()));
        }
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        // both sides are bounded by MAX_QUANTITY, the sum cannot overflow
        let merged = order.line(sku).map_or(0, |l| l.qty) + qty;
        if merged > MAX_QUANTITY {
            return Err(OrderError::QuantityTooLarge {
                qty: merged,
                max: MAX_QUANTITY,
            });
        }
        order.merge_item(sku, qty);
        tracing::debug!(order_id = %order_id, sku = %sku, qty, "item added");
        Ok(())
    }

    /// Remove `qty` of `sku` from an order
    ///
    /// Decrements the matching line, deleting it once the quantity
    /// drops to zero or below. A sku with no line is a no-op, not an
    /// error.
    pub fn remove_item(&self, order_id: &str, sku: &str, qty: i32) -> Result<(), OrderError> {
        if qty <= 0 {
            return Err(OrderError::InvalidQuantity(qty));
        }
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        if order.decrement_item(sku, qty) {
            tracing::debug!(order_id = %order_id, sku = %sku, qty, "item removed");
        }
        Ok(())
    }

    /// Transition an order to `next` per the lifecycle table
    pub fn transition(&self, order_id: &str, next: OrderStatus) -> Result<OrderStatus, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Self::transition_order(order, next)?;
        Ok(next)
    }

    fn transition_order(order: &mut Order, next: OrderStatus) -> Result<(), OrderError> {
        if !order.status.can_transition_to(next) {
            return Err(OrderError::IllegalTransition {
                from: order.status,
                to: next,
            });
        }
        tracing::info!(order_id = %order.id, from = %order.status, to = %next, "status transition");
        order.status = next;
        Ok(())
    }

    // ==================== Kitchen flow ====================

    /// Send an order to the kitchen
    ///
    /// Transitions to SENT_TO_KITCHEN, then projects a ticket and
    /// appends it to the kitchen queue. The queue is untouched when the
    /// transition fails.
    pub fn send_to_kitchen(&self, order_id: &str) -> Result<KitchenTicket, OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Self::transition_order(order, OrderStatus::SentToKitchen)?;
        let ticket = project_ticket(&self.catalog, order);
        self.kitchen.write().push(ticket.clone());
        Ok(ticket)
    }

    /// Mark an order as served
    ///
    /// Transitions to SERVED, then removes the order's queue entry. An
    /// absent entry is a no-op; the order might have been served out of
    /// band.
    pub fn mark_served(&self, order_id: &str) -> Result<(), OrderError> {
        let mut orders = self.orders.write();
        let order = orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Self::transition_order(order, OrderStatus::Served)?;
        self.kitchen.write().remove_by_order(order_id);
        Ok(())
    }

    /// Snapshot of the kitchen queue in FIFO order
    pub fn kitchen_queue(&self) -> Vec<KitchenTicket> {
        self.kitchen.read().iter().cloned().collect()
    }

    // ==================== Billing and reporting ====================

    /// Compute the totals breakdown for an order
    ///
    /// The outcome carries any non-fatal coupon diagnostics alongside
    /// the totals.
    pub fn compute_totals(&self, order_id: &str) -> Result<TotalsOutcome, OrderError> {
        let orders = self.orders.read();
        let order = orders
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Ok(compute_totals(&self.catalog, &self.coupons, &self.config, order))
    }

    /// Build the display-ready bill report for an order
    pub fn order_report(&self, order_id: &str) -> Result<OrderReport, OrderError> {
        let orders = self.orders.read();
        let order = orders
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Ok(order_report(&self.catalog, &self.coupons, &self.config, order))
    }

    /// Aggregate an order's line totals by menu category
    pub fn sales_by_category(&self, order_id: &str) -> Result<Vec<CategorySales>, OrderError> {
        let orders = self.orders.read();
        let order = orders
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Ok(sales_by_category(&self.catalog, order))
    }

    /// Lines of an order belonging to one menu category
    pub fn items_in_category(
        &self,
        order_id: &str,
        category: Category,
    ) -> Result<Vec<CategoryLine>, OrderError> {
        let orders = self.orders.read();
        let order = orders
            .get(order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Ok(items_in_category(&self.catalog, order, category))
    }

    // ==================== Archive ====================

    /// Move every PAID or CANCELLED order out of the live store into the
    /// archive, returning how many were drained
    pub fn archive_closed(&self) -> usize {
        let mut orders = self.orders.write();
        let closed: Vec<String> = orders
            .iter()
            .filter(|(_, o)| o.status.is_terminal())
            .map(|(id, _)| id.clone())
            .collect();
        let count = closed.len();
        if count > 0 {
            let mut archive = self.archive.write();
            for id in closed {
                if let Some(order) = orders.remove(&id) {
                    archive.push(order);
                }
            }
            tracing::info!(count, "archived closed orders");
        }
        count
    }

    /// Snapshot of archived orders, oldest first
    pub fn archived_orders(&self) -> Vec<Order> {
        self.archive.read().clone()
    }

    /// Number of orders in the live store
    pub fn live_count(&self) -> usize {
        self.orders.read().len()
    }
}
