//! Domain values for quote pricing.
//!
//! Nothing here is persisted; each value lives for one computation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::weights::Location;

/// Validated pricing inputs for a single quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub members: u32,
    pub weekly_visits: u32,
    pub hours_per_visit: u32,
    pub location: Location,
    pub add_tax: bool,
    pub tax_percentage: Decimal,
    pub add_management_fee: bool,
    pub management_fee_percentage: Decimal,
}

/// Intermediate values used to price one visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub adjusted_base_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub member_weight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub visit_weight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hour_weight: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub location_weight: Decimal,
}

/// Per-visit and annual price for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteResult {
    pub cost_per_visit: Decimal,
    pub annual_visits: u32,
    pub annual_cost: Decimal,
}
