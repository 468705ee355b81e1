//! Shared types for the Comanda order engine
//!
//! Common types used across the workspace: menu models, order domain
//! types, the unified error system, and utility helpers.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use order::{KitchenTicket, LineItem, Order, OrderStatus};
