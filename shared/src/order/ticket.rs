//! Kitchen ticket - read-only projection of an order

use super::status::OrderStatus;
use crate::models::Category;
use serde::{Deserialize, Serialize};

/// One item on a kitchen ticket, joined with catalog data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketItem {
    pub sku: String,
    pub name: String,
    pub category: Category,
    pub qty: i32,
}

/// Remaining order fields carried on the ticket
///
/// An explicit field-by-field projection; the ticket never carries the
/// line items themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TicketMeta {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    pub created_at: i64,
}

/// Kitchen-facing view of an order
///
/// Derived at send-to-kitchen time; not independently persisted beyond
/// the in-memory kitchen queue, keyed by `order_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KitchenTicket {
    pub order_id: String,
    pub table: String,
    pub server: String,
    pub items: Vec<TicketItem>,
    pub meta: TicketMeta,
}
