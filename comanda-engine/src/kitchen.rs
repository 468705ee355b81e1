//! Kitchen ticket projection and FIFO queue

use crate::catalog::MenuCatalog;
use shared::order::{KitchenTicket, Order, TicketItem, TicketMeta};
use std::collections::VecDeque;

/// Project the kitchen-facing view of an order
///
/// Explicit field-by-field projection: line items are joined with
/// catalog data, remaining order fields land in `meta`. A line whose
/// sku no longer resolves is skipped (zero contribution, consistent
/// with the billing guards).
pub fn project_ticket(catalog: &MenuCatalog, order: &Order) -> KitchenTicket {
    let items = order
        .items
        .iter()
        .filter_map(|line| {
            catalog.lookup(&line.sku).map(|item| TicketItem {
                sku: line.sku.clone(),
                name: item.name.clone(),
                category: item.category,
                qty: line.qty,
            })
        })
        .collect();

    KitchenTicket {
        order_id: order.id.clone(),
        table: order.table.clone(),
        server: order.server.clone(),
        items,
        meta: TicketMeta {
            status: order.status,
            coupon: order.coupon.clone(),
            created_at: order.created_at,
        },
    }
}

/// FIFO queue of kitchen tickets, keyed by order id
#[derive(Debug, Clone, Default)]
pub struct KitchenQueue {
    tickets: VecDeque<KitchenTicket>,
}

impl KitchenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticket to the back of the queue
    pub fn push(&mut self, ticket: KitchenTicket) {
        self.tickets.push_back(ticket);
    }

    /// Remove the ticket for an order id, wherever it sits in the queue
    ///
    /// Returns the removed ticket; `None` when the order has no queued
    /// ticket (not an error, the order may have been served out of band).
    pub fn remove_by_order(&mut self, order_id: &str) -> Option<KitchenTicket> {
        let idx = self.tickets.iter().position(|t| t.order_id == order_id)?;
        self.tickets.remove(idx)
    }

    /// Next ticket to prepare, if any
    pub fn front(&self) -> Option<&KitchenTicket> {
        self.tickets.front()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Tickets in FIFO order
    pub fn iter(&self) -> impl Iterator<Item = &KitchenTicket> {
        self.tickets.iter()
    }
}
