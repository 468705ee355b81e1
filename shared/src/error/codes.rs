//! Unified error codes for the Comanda engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Catalog and coupon errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 4xxx: Order ====================
    /// Order not found in the live store
    OrderNotFound = 4001,
    /// Status transition not allowed by the lifecycle table
    IllegalTransition = 4002,

    // ==================== 6xxx: Catalog / Coupon ====================
    /// SKU absent from the menu catalog
    UnknownSku = 6001,
    /// Coupon code not present in the coupon book (non-fatal)
    UnrecognizedCoupon = 6002,
}

impl ErrorCode {
    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::OrderNotFound => "Order not found",
            Self::IllegalTransition => "Illegal order status transition",
            Self::UnknownSku => "Unknown SKU",
            Self::UnrecognizedCoupon => "Unrecognized coupon code",
        }
    }

    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::IllegalTransition),
            6001 => Ok(Self::UnknownSku),
            6002 => Ok(Self::UnrecognizedCoupon),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderNotFound,
            ErrorCode::IllegalTransition,
            ErrorCode::UnknownSku,
            ErrorCode::UnrecognizedCoupon,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(9999), Err(InvalidErrorCode(9999)));
    }
}
