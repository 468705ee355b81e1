//! Billing configuration
//!
//! Tax and service rates are configuration constants, owned by the
//! manager and passed into every totals computation.

use rust_decimal::Decimal;

/// Default tax rate (10%)
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Default service rate (5%)
pub const DEFAULT_SERVICE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Default currency label for formatted amounts
pub const DEFAULT_CURRENCY: &str = "MAD";

/// Billing rates and currency label
#[derive(Debug, Clone, PartialEq)]
pub struct BillingConfig {
    /// Tax rate applied to the discounted subtotal (e.g. 0.10 = 10%)
    pub tax_rate: Decimal,
    /// Service rate applied to the discounted subtotal (e.g. 0.05 = 5%)
    pub service_rate: Decimal,
    /// Currency label appended to formatted amounts
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            service_rate: DEFAULT_SERVICE_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let config = BillingConfig::default();
        assert_eq!(config.tax_rate, Decimal::new(10, 2));
        assert_eq!(config.service_rate, Decimal::new(5, 2));
        assert_eq!(config.currency, "MAD");
    }
}
