//! Reporting - display-ready bill rows, totals, and aggregations
//!
//! Pure and read-only: nothing here mutates an order. Monetary values
//! are rounded and formatted as currency strings at this boundary only.

use crate::catalog::MenuCatalog;
use crate::config::BillingConfig;
use crate::discount::{CouponBook, DiscountWarning};
use crate::money::{compute_totals, line_total, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Category;
use shared::order::Order;

/// Format a monetary amount with the configured currency label
pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{:.2} {}", round_money(amount), currency)
}

/// One bill row joining catalog data with quantity and line total
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub sku: String,
    pub name: String,
    pub qty: i32,
    /// Unit price, currency-formatted
    pub price: String,
    /// Line total, currency-formatted
    pub line: String,
}

/// Currency-formatted totals block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportTotals {
    pub subtotal: String,
    /// Rendered with a leading minus, e.g. `- 10.00 MAD`
    pub discount: String,
    pub taxes: String,
    pub service: String,
    pub total: String,
}

/// Display-ready order report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderReport {
    pub rows: Vec<ReportRow>,
    pub totals: ReportTotals,
    /// Non-fatal diagnostics from discount resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<DiscountWarning>,
}

/// Build the bill report for an order
///
/// Rows keep the order's line sequence; a line whose sku no longer
/// resolves is skipped, matching the zero-contribution billing guards.
pub fn order_report(
    catalog: &MenuCatalog,
    coupons: &CouponBook,
    config: &BillingConfig,
    order: &Order,
) -> OrderReport {
    let rows = order
        .items
        .iter()
        .filter_map(|l| {
            catalog.lookup(&l.sku).map(|item| ReportRow {
                sku: l.sku.clone(),
                name: item.name.clone(),
                qty: l.qty,
                price: format_money(item.price, &config.currency),
                line: format_money(line_total(catalog, &l.sku, l.qty), &config.currency),
            })
        })
        .collect();

    let outcome = compute_totals(catalog, coupons, config, order);
    let t = &outcome.totals;
    OrderReport {
        rows,
        totals: ReportTotals {
            subtotal: format_money(t.subtotal, &config.currency),
            discount: format!("- {}", format_money(t.discount, &config.currency)),
            taxes: format_money(t.taxes, &config.currency),
            service: format_money(t.service, &config.currency),
            total: format_money(t.total, &config.currency),
        },
        warning: outcome.warning,
    }
}

/// Sales for one category within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySales {
    pub category: Category,
    pub amount: Decimal,
}

/// Aggregate an order's line totals by menu category
///
/// Categories appear in first-seen line order.
pub fn sales_by_category(catalog: &MenuCatalog, order: &Order) -> Vec<CategorySales> {
    let mut sales: Vec<CategorySales> = Vec::new();
    for line in &order.items {
        let Some(item) = catalog.lookup(&line.sku) else {
            continue;
        };
        let amount = line_total(catalog, &line.sku, line.qty);
        match sales.iter_mut().find(|s| s.category == item.category) {
            Some(entry) => entry.amount += amount,
            None => sales.push(CategorySales {
                category: item.category,
                amount,
            }),
        }
    }
    sales
}

/// One line of an order filtered to a category, joined with catalog data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryLine {
    pub sku: String,
    pub name: String,
    pub qty: i32,
    pub price: Decimal,
    pub line: Decimal,
}

/// Lines of an order belonging to one menu category
pub fn items_in_category(
    catalog: &MenuCatalog,
    order: &Order,
    category: Category,
) -> Vec<CategoryLine> {
    order
        .items
        .iter()
        .filter_map(|l| {
            let item = catalog.lookup(&l.sku)?;
            (item.category == category).then(|| CategoryLine {
                sku: l.sku.clone(),
                name: item.name.clone(),
                qty: l.qty,
                price: item.price,
                line: line_total(catalog, &l.sku, l.qty),
            })
        })
        .collect()
}
