//! Quote service: validates a submitted form and prices it.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::calculators::{calculate_quote, weight_breakdown};
use super::models::QuoteRequest;
use super::requests::QuoteFormRequest;
use super::responses::{MoneyResponse, QuoteResponse};

pub const BRANCHES_RANGE: RangeInclusive<i64> = 1..=10;
pub const MEMBERS_RANGE: RangeInclusive<i64> = 1..=40000;
pub const WEEKLY_VISITS_RANGE: RangeInclusive<i64> = 1..=7;
pub const HOURS_PER_VISIT_RANGE: RangeInclusive<i64> = 1..=24;
pub const PERCENTAGE_RANGE: RangeInclusive<Decimal> = dec!(5)..=dec!(30);

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid quote input: {message}")]
    InvalidInput {
        message: String,
        errors: Vec<String>,
    },
}

impl PricingError {
    /// Form that could not be read at all (bad JSON, unknown location, non-numeric count)
    pub fn malformed(detail: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: "Malformed quote form".to_string(),
            errors: vec![detail.into()],
        }
    }
}

fn check_count(errors: &mut Vec<String>, field: &str, value: i64, range: &RangeInclusive<i64>) {
    if !range.contains(&value) {
        errors.push(format!(
            "{} must be between {} and {} (got {})",
            field,
            range.start(),
            range.end(),
            value
        ));
    }
}

fn check_percentage(errors: &mut Vec<String>, field: &str, enabled: bool, value: Decimal) {
    if enabled && !PERCENTAGE_RANGE.contains(&value) {
        errors.push(format!(
            "{} must be between {} and {} (got {})",
            field,
            PERCENTAGE_RANGE.start(),
            PERCENTAGE_RANGE.end(),
            value
        ));
    }
}

/// Check every field of a submitted form against its domain.
///
/// All violations are reported together. Percentages are only checked when
/// their toggle is on, since a disabled toggle ignores its percentage.
pub fn validate(form: &QuoteFormRequest) -> Result<QuoteRequest, PricingError> {
    let mut errors = Vec::new();

    check_count(&mut errors, "branches", form.branches, &BRANCHES_RANGE);
    check_count(&mut errors, "members", form.members, &MEMBERS_RANGE);
    check_count(&mut errors, "weekly_visits", form.weekly_visits, &WEEKLY_VISITS_RANGE);
    check_count(&mut errors, "hours_per_visit", form.hours_per_visit, &HOURS_PER_VISIT_RANGE);
    check_percentage(&mut errors, "tax_percentage", form.add_tax, form.tax_percentage);
    check_percentage(
        &mut errors,
        "management_fee_percentage",
        form.add_management_fee,
        form.management_fee_percentage,
    );

    if !errors.is_empty() {
        return Err(PricingError::InvalidInput {
            message: format!("{} field(s) out of range", errors.len()),
            errors,
        });
    }

    // Ranges above guarantee these fit in u32
    Ok(QuoteRequest {
        members: form.members as u32,
        weekly_visits: form.weekly_visits as u32,
        hours_per_visit: form.hours_per_visit as u32,
        location: form.location,
        add_tax: form.add_tax,
        tax_percentage: form.tax_percentage,
        add_management_fee: form.add_management_fee,
        management_fee_percentage: form.management_fee_percentage,
    })
}

/// Validate and price a quote form.
pub fn quote(form: &QuoteFormRequest) -> Result<QuoteResponse, PricingError> {
    let request = validate(form)?;
    let result = calculate_quote(&request);

    debug!(
        members = request.members,
        weekly_visits = request.weekly_visits,
        hours_per_visit = request.hours_per_visit,
        location = %request.location,
        cost_per_visit = %result.cost_per_visit,
        annual_cost = %result.annual_cost,
        "Quote calculated"
    );

    Ok(QuoteResponse {
        client_name: form.client_name.clone(),
        branches: form.branches as u32,
        cost_per_visit: MoneyResponse::quoted(result.cost_per_visit),
        annual_visits: result.annual_visits,
        annual_cost: MoneyResponse::quoted(result.annual_cost),
        management_fee_percentage: form.management_fee_percentage,
        breakdown: weight_breakdown(&request),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::weights::Location;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput {
            message: "2 field(s) out of range".to_string(),
            errors: vec![],
        };
        assert!(err.to_string().contains("2 field(s) out of range"));
    }

    #[test]
    fn test_malformed_form_error() {
        match PricingError::malformed("location: unknown variant") {
            PricingError::InvalidInput { message, errors } => {
                assert_eq!(message, "Malformed quote form");
                assert_eq!(errors, vec!["location: unknown variant".to_string()]);
            }
        }
    }

    #[test]
    fn test_quote_with_form_defaults() {
        let response = quote(&QuoteFormRequest::default()).unwrap();

        assert_eq!(response.cost_per_visit.amount, dec!(598.95));
        assert_eq!(response.annual_cost.amount, dec!(28749.60));
        assert_eq!(response.annual_visits, 48);
        assert_eq!(response.branches, 3);
        assert_eq!(response.management_fee_percentage, dec!(10));
    }

    #[test]
    fn test_quote_remote_without_toggles() {
        let form = QuoteFormRequest {
            client_name: "Acme Gym".to_string(),
            members: 30,
            hours_per_visit: 1,
            location: Location::Remote,
            add_tax: false,
            add_management_fee: false,
            ..Default::default()
        };

        let response = quote(&form).unwrap();

        assert_eq!(response.client_name, "Acme Gym");
        assert_eq!(response.cost_per_visit.amount, dec!(607.50));
        assert_eq!(response.annual_cost.amount, dec!(29160.00));
        assert_eq!(response.breakdown.location_weight, dec!(1.35));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let form = QuoteFormRequest {
            branches: 0,
            members: -1,
            weekly_visits: 0,
            hours_per_visit: 25,
            tax_percentage: dec!(31),
            management_fee_percentage: dec!(4),
            ..Default::default()
        };

        match validate(&form) {
            Err(PricingError::InvalidInput { errors, .. }) => {
                assert_eq!(errors.len(), 6);
                assert!(errors[1].starts_with("members"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_ignores_percentage_when_toggle_off() {
        let form = QuoteFormRequest {
            add_tax: false,
            tax_percentage: dec!(0),
            add_management_fee: false,
            management_fee_percentage: dec!(99),
            ..Default::default()
        };

        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_validate_accepts_domain_edges() {
        for (members, weekly_visits, hours_per_visit) in [(1, 1, 1), (40000, 7, 24)] {
            let form = QuoteFormRequest {
                members,
                weekly_visits,
                hours_per_visit,
                tax_percentage: dec!(5),
                management_fee_percentage: dec!(30),
                ..Default::default()
            };
            assert!(validate(&form).is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_members_above_last_tier() {
        let form = QuoteFormRequest {
            members: 40001,
            ..Default::default()
        };

        assert!(validate(&form).is_err());
    }
}
