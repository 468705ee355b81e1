//! Order domain types
//!
//! This module provides the types for the order lifecycle:
//! - [`Order`]: the mutable aggregate owning its line items
//! - [`OrderStatus`]: the status state machine's vocabulary
//! - [`KitchenTicket`]: the read-only projection sent to the kitchen

pub mod status;
pub mod ticket;
pub mod types;

// Re-exports
pub use status::OrderStatus;
pub use ticket::{KitchenTicket, TicketItem, TicketMeta};
pub use types::{LineItem, Order};
