//! Coupon book - table-driven discount computation
//!
//! Coupon dispatch is a mapping from code to an [`Adjustment`] strategy,
//! open for extension via [`CouponBook::register`] without touching the
//! dispatch site. An unrecognized code is not an error: the discount
//! resolves to zero and a [`DiscountWarning`] is surfaced to the caller
//! alongside a `tracing::warn!`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use std::collections::HashMap;

/// Maximum absolute amount for `WELCOME10` (10 units)
const WELCOME10_CAP: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Percentage for `WELCOME10` (10%)
const WELCOME10_PERCENT: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Flat amount for `DRINKS5` (5 units)
const DRINKS5_AMOUNT: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Discount adjustment strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "type")]
pub enum Adjustment {
    /// Percentage of the subtotal, optionally capped at an absolute amount
    Percentage {
        /// Fraction of the subtotal (e.g. 0.10 = 10%)
        percent: Decimal,
        #[serde(skip_serializing_if = "Option::is_none")]
        cap: Option<Decimal>,
    },
    /// Flat amount
    FixedAmount { amount: Decimal },
}

/// Non-fatal diagnostics emitted during discount computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "kind")]
pub enum DiscountWarning {
    /// Coupon code absent from the coupon book; discount resolved to zero
    UnrecognizedCoupon { code: String },
}

impl DiscountWarning {
    /// Error code for wire serialization of diagnostics
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedCoupon { .. } => ErrorCode::UnrecognizedCoupon,
        }
    }
}

/// Result of a discount computation
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountOutcome {
    /// Discount amount, always within `[0, subtotal]`
    pub amount: Decimal,
    pub warning: Option<DiscountWarning>,
}

impl DiscountOutcome {
    fn clean(amount: Decimal) -> Self {
        Self {
            amount,
            warning: None,
        }
    }
}

/// Mapping of coupon code → adjustment strategy
#[derive(Debug, Clone, Default)]
pub struct CouponBook {
    rules: HashMap<String, Adjustment>,
}

impl CouponBook {
    /// Empty book: every coupon is unrecognized
    pub fn empty() -> Self {
        Self::default()
    }

    /// Book seeded with the stock coupons
    ///
    /// - `WELCOME10`: min(10, 10% of subtotal)
    /// - `DRINKS5`: flat 5, capped at the subtotal
    pub fn with_defaults() -> Self {
        let mut book = Self::default();
        book.register(
            "WELCOME10",
            Adjustment::Percentage {
                percent: WELCOME10_PERCENT,
                cap: Some(WELCOME10_CAP),
            },
        );
        book.register(
            "DRINKS5",
            Adjustment::FixedAmount {
                amount: DRINKS5_AMOUNT,
            },
        );
        book
    }

    /// Register or replace a coupon rule
    pub fn register(&mut self, code: impl Into<String>, adjustment: Adjustment) {
        self.rules.insert(code.into(), adjustment);
    }

    /// Look up the rule for a code
    pub fn rule(&self, code: &str) -> Option<&Adjustment> {
        self.rules.get(code)
    }

    /// Compute the discount for a subtotal and optional coupon code
    ///
    /// The returned amount is clamped into `[0, subtotal]`. The flat
    /// `DRINKS5` amount is capped at the subtotal here even though the
    /// totals computation floors at zero anyway.
    pub fn compute_discount(&self, subtotal: Decimal, coupon: Option<&str>) -> DiscountOutcome {
        let Some(code) = coupon else {
            return DiscountOutcome::clean(Decimal::ZERO);
        };

        let raw = match self.rules.get(code) {
            Some(Adjustment::Percentage { percent, cap }) => {
                let pct = subtotal * *percent;
                match cap {
                    Some(cap) => pct.min(*cap),
                    None => pct,
                }
            }
            Some(Adjustment::FixedAmount { amount }) => *amount,
            None => {
                tracing::warn!(coupon = %code, "unrecognized coupon code, ignoring");
                return DiscountOutcome {
                    amount: Decimal::ZERO,
                    warning: Some(DiscountWarning::UnrecognizedCoupon {
                        code: code.to_string(),
                    }),
                };
            }
        };

        DiscountOutcome::clean(raw.clamp(Decimal::ZERO, subtotal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_coupon_is_zero() {
        let book = CouponBook::with_defaults();
        let outcome = book.compute_discount(Decimal::from(100), None);
        assert_eq!(outcome.amount, Decimal::ZERO);
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_welcome10_percentage_below_cap() {
        let book = CouponBook::with_defaults();
        // 10% of 60 = 6, under the 10 cap
        let outcome = book.compute_discount(Decimal::from(60), Some("WELCOME10"));
        assert_eq!(outcome.amount, Decimal::from(6));
    }

    #[test]
    fn test_welcome10_hits_cap() {
        let book = CouponBook::with_defaults();
        // 10% of 214 = 21.4, capped at 10
        let outcome = book.compute_discount(Decimal::from(214), Some("WELCOME10"));
        assert_eq!(outcome.amount, Decimal::from(10));
    }

    #[test]
    fn test_drinks5_flat() {
        let book = CouponBook::with_defaults();
        let outcome = book.compute_discount(Decimal::from(50), Some("DRINKS5"));
        assert_eq!(outcome.amount, Decimal::from(5));
    }

    #[test]
    fn test_drinks5_capped_at_small_subtotal() {
        let book = CouponBook::with_defaults();
        let outcome = book.compute_discount(Decimal::from(3), Some("DRINKS5"));
        assert_eq!(outcome.amount, Decimal::from(3));
    }

    #[test]
    fn test_unrecognized_coupon_warns_and_is_zero() {
        let book = CouponBook::with_defaults();
        let outcome = book.compute_discount(Decimal::from(100), Some("BOGUS"));
        assert_eq!(outcome.amount, Decimal::ZERO);
        assert_eq!(
            outcome.warning,
            Some(DiscountWarning::UnrecognizedCoupon {
                code: "BOGUS".to_string()
            })
        );
        assert_eq!(
            outcome.warning.unwrap().code(),
            ErrorCode::UnrecognizedCoupon
        );
    }

    #[test]
    fn test_registered_rule_extends_the_book() {
        let mut book = CouponBook::with_defaults();
        book.register(
            "HALFOFF",
            Adjustment::Percentage {
                percent: Decimal::new(50, 2),
                cap: None,
            },
        );
        let outcome = book.compute_discount(Decimal::from(80), Some("HALFOFF"));
        assert_eq!(outcome.amount, Decimal::from(40));
    }

    #[test]
    fn test_discount_never_exceeds_subtotal() {
        let book = CouponBook::with_defaults();
        for subtotal in [0i64, 1, 4, 5, 9, 10, 99, 1000] {
            let subtotal = Decimal::from(subtotal);
            for coupon in [Some("WELCOME10"), Some("DRINKS5"), Some("BOGUS"), None] {
                let outcome = book.compute_discount(subtotal, coupon);
                assert!(outcome.amount >= Decimal::ZERO);
                assert!(outcome.amount <= subtotal);
            }
        }
    }
}
