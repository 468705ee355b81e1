//! Manager errors and their mapping to the unified error system

use shared::error::{AppError, ErrorCode};
use shared::order::OrderStatus;
use thiserror::Error;

/// Errors raised by [`OrdersManager`](super::OrdersManager) operations
///
/// Every failing call leaves the targeted order unmodified.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Unknown SKU: {0}")]
    UnknownSku(String),

    #[error("Invalid transition {from} -> {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i32),

    #[error("quantity exceeds maximum allowed ({max}), got {qty}")]
    QuantityTooLarge { qty: i32, max: i32 },
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let app = match err {
            OrderError::UnknownSku(sku) => {
                AppError::with_message(ErrorCode::UnknownSku, format!("Unknown SKU: {}", sku))
                    .with_detail("sku", sku)
            }
            OrderError::IllegalTransition { from, to } => AppError::with_message(
                ErrorCode::IllegalTransition,
                format!("Invalid transition {} -> {}", from, to),
            )
            .with_detail("from", from.name())
            .with_detail("to", to.name()),
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {}", id))
                    .with_detail("order_id", id)
            }
            OrderError::InvalidQuantity(qty) => {
                AppError::validation(format!("quantity must be positive, got {}", qty))
                    .with_detail("qty", qty)
            }
            OrderError::QuantityTooLarge { qty, max } => AppError::validation(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                max, qty
            ))
            .with_detail("qty", qty)
            .with_detail("max", max),
        };
        let category = app.code.category().name();
        app.with_detail("category", category)
    }
}
