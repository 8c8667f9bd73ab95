//! Core pricing calculation functions.
//!
//! Pure functions for quote math: no I/O and no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{QuoteRequest, QuoteResult, WeightBreakdown};
use super::weights::{hour_weight, location_weight, member_weight, visit_weight};

/// Base price of one visit before weights, tax and fees.
pub const BASE_RATE: Decimal = dec!(450);

/// Operating weeks used to annualize a weekly schedule.
pub const OPERATING_WEEKS_PER_YEAR: u32 = 48;

/// Decimal places kept on every quoted amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Display label for quoted amounts.
pub const CURRENCY: &str = "EGP";

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use inhouse_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Apply `percentage` on top of `amount` when `enabled`.
fn apply_percentage(amount: Decimal, enabled: bool, percentage: Decimal) -> Decimal {
    if enabled {
        amount * (Decimal::ONE + percentage / Decimal::ONE_HUNDRED)
    } else {
        amount
    }
}

/// Resolve every multiplier that goes into a visit price.
pub fn weight_breakdown(request: &QuoteRequest) -> WeightBreakdown {
    WeightBreakdown {
        adjusted_base_rate: apply_percentage(BASE_RATE, request.add_tax, request.tax_percentage),
        member_weight: member_weight(request.members),
        visit_weight: visit_weight(request.weekly_visits),
        hour_weight: hour_weight(request.hours_per_visit),
        location_weight: location_weight(request.location),
    }
}

/// Calculate the price of a single visit.
///
/// The tax-adjusted base rate is multiplied by the member, visit, hour and
/// location weights; the management fee is applied last, then the total is
/// rounded to two places.
pub fn price_per_visit(request: &QuoteRequest) -> Decimal {
    let weights = weight_breakdown(request);

    let total = weights.adjusted_base_rate
        * weights.member_weight
        * weights.visit_weight
        * weights.hour_weight
        * weights.location_weight;

    let total = apply_percentage(
        total,
        request.add_management_fee,
        request.management_fee_percentage,
    );

    round_money(total, MONEY_DECIMAL_PLACES)
}

/// Number of visits in an operating year
pub fn annual_visits(weekly_visits: u32) -> u32 {
    OPERATING_WEEKS_PER_YEAR.saturating_mul(weekly_visits)
}

/// Calculate the annual cost from an already rounded visit price.
pub fn annual_cost(price_per_visit: Decimal, weekly_visits: u32) -> Decimal {
    round_money(
        price_per_visit * Decimal::from(annual_visits(weekly_visits)),
        MONEY_DECIMAL_PLACES,
    )
}

/// Price a request end to end.
pub fn calculate_quote(request: &QuoteRequest) -> QuoteResult {
    let cost_per_visit = price_per_visit(request);

    QuoteResult {
        cost_per_visit,
        annual_visits: annual_visits(request.weekly_visits),
        annual_cost: annual_cost(cost_per_visit, request.weekly_visits),
    }
}
