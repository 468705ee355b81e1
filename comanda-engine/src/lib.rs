//! Order lifecycle and billing engine
//!
//! This crate implements the restaurant order core:
//!
//! - **catalog**: SKU → menu item lookup
//! - **discount**: coupon book mapping codes to discount strategies
//! - **money**: precise billing math over `rust_decimal`
//! - **kitchen**: kitchen ticket projection and FIFO queue
//! - **report**: display-ready bill rows and totals
//! - **manager**: the [`OrdersManager`] context owning the live order
//!   store, kitchen queue, and archive
//!
//! # Control Flow
//!
//! ```text
//! create_order → add_item/remove_item → order_report
//!       ↓                                    ↓
//! send_to_kitchen → mark_served → PAID   computeTotals + coupon book
//!       ↓
//! kitchen queue (FIFO, keyed by order id)
//! ```
//!
//! All state lives in the caller-owned [`OrdersManager`]; there are no
//! module-level globals.

pub mod catalog;
pub mod config;
pub mod discount;
pub mod kitchen;
pub mod manager;
pub mod money;
pub mod report;

// Re-exports
pub use catalog::MenuCatalog;
pub use config::BillingConfig;
pub use discount::{Adjustment, CouponBook, DiscountOutcome, DiscountWarning};
pub use kitchen::{project_ticket, KitchenQueue};
pub use manager::{OrderError, OrdersManager};
pub use money::{line_total, Totals, TotalsOutcome, MAX_QUANTITY};
pub use report::{CategoryLine, CategorySales, OrderReport, ReportRow, ReportTotals};

// Re-export shared types for convenience
pub use shared::models::{Category, MenuItem};
pub use shared::order::{KitchenTicket, LineItem, Order, OrderStatus, TicketItem};
