//! Response DTOs for the booking estimator.

use rust_decimal::Decimal;
use serde::Serialize;

use super::models::Season;

/// Result of a single estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub valid: bool,
}

impl EstimateResult {
    pub fn view(&self, currency_symbol: &str) -> EstimateView {
        EstimateView {
            nights: self.nights.to_string(),
            total: format_money(currency_symbol, self.total),
            submit_enabled: self.valid,
        }
    }
}

/// Display strings for the estimate panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateView {
    pub nights: String,
    pub total: String,
    pub submit_enabled: bool,
}

/// A row in the package table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageRow {
    pub id: i64,
    pub destination: String,
    pub duration_label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub season: Season,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
}

/// An entry in the package picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageOption {
    pub id: i64,
    pub label: String,
}

/// Prefix an amount with the currency symbol, e.g. `₹1320`
pub fn format_money(currency_symbol: &str, amount: Decimal) -> String {
    format!("{}{}", currency_symbol, amount.normalize())
}
