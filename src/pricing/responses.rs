//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{CURRENCY, MONEY_DECIMAL_PLACES};
use super::models::WeightBreakdown;
use super::weights::WeightTable;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Quoted amount with a fixed two-place scale ("607.50", not "607.5")
    pub fn quoted(amount: Decimal) -> Self {
        let mut amount = amount;
        amount.rescale(MONEY_DECIMAL_PLACES);
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// Response for a priced quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub client_name: String,
    pub branches: u32,
    pub cost_per_visit: MoneyResponse,
    pub annual_visits: u32,
    pub annual_cost: MoneyResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub management_fee_percentage: Decimal,
    pub breakdown: WeightBreakdown,
}

/// One step of a published weight table
#[derive(Debug, Serialize)]
pub struct WeightTierResponse {
    pub min: u32,
    pub max: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub weight: Decimal,
}

/// A published weight table
#[derive(Debug, Serialize)]
pub struct WeightTableResponse {
    pub name: &'static str,
    pub tiers: Vec<WeightTierResponse>,
    #[serde(with = "rust_decimal::serde::str")]
    pub fallback: Decimal,
}

impl From<&WeightTable> for WeightTableResponse {
    fn from(table: &WeightTable) -> Self {
        Self {
            name: table.name,
            tiers: table
                .tiers
                .iter()
                .map(|tier| WeightTierResponse {
                    min: *tier.range.start(),
                    max: *tier.range.end(),
                    weight: tier.weight,
                })
                .collect(),
            fallback: table.fallback,
        }
    }
}

/// Response listing the pricing constants and weight tables
#[derive(Debug, Serialize)]
pub struct PricingTablesResponse {
    pub base_rate: MoneyResponse,
    pub operating_weeks_per_year: u32,
    pub members: WeightTableResponse,
    pub weekly_visits: WeightTableResponse,
    pub hours_per_visit: WeightTableResponse,
    #[serde(with = "rust_decimal::serde::str")]
    pub near_location_weight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub remote_location_weight: Decimal,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
