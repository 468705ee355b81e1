//! Billing math using rust_decimal for precision
//!
//! All monetary values stay as `Decimal` end to end; rounding to two
//! places happens only at the presentation boundary (see `report`).

use crate::catalog::MenuCatalog;
use crate::config::BillingConfig;
use crate::discount::{CouponBook, DiscountWarning};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::order::Order;

/// Rounding for display values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Round a monetary value for display
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Total for one line: `price(sku) * qty`
///
/// Total function over already-validated data: an absent sku or a
/// non-positive quantity contributes zero rather than raising.
pub fn line_total(catalog: &MenuCatalog, sku: &str, qty: i32) -> Decimal {
    if qty <= 0 {
        return Decimal::ZERO;
    }
    match catalog.lookup(sku) {
        Some(item) => item.price * Decimal::from(qty),
        None => Decimal::ZERO,
    }
}

/// Totals breakdown for an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxes: Decimal,
    pub service: Decimal,
    pub total: Decimal,
}

/// Totals plus any non-fatal diagnostics from discount resolution
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsOutcome {
    pub totals: Totals,
    pub warning: Option<DiscountWarning>,
}

/// Compute the full totals breakdown for an order
///
/// subtotal = Σ line totals; afterDiscount = max(0, subtotal − discount);
/// taxes and service apply to the discounted subtotal.
pub fn compute_totals(
    catalog: &MenuCatalog,
    coupons: &CouponBook,
    config: &BillingConfig,
    order: &Order,
) -> TotalsOutcome {
    let subtotal: Decimal = order
        .items
        .iter()
        .map(|line| line_total(catalog, &line.sku, line.qty))
        .sum();

    let discount = coupons.compute_discount(subtotal, order.coupon.as_deref());
    // Floor at zero even though the coupon book clamps its output; a
    // custom rule registered by the caller may still overshoot.
    let after_discount = (subtotal - discount.amount).max(Decimal::ZERO);
    let taxes = after_discount * config.tax_rate;
    let service = after_discount * config.service_rate;
    let total = after_discount + taxes + service;

    TotalsOutcome {
        totals: Totals {
            subtotal,
            discount: discount.amount,
            taxes,
            service,
            total,
        },
        warning: discount.warning,
    }
}
