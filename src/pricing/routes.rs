//! JSON routes for the pricing engine.

use axum::{extract::rejection::JsonRejection, routing::get, routing::post, Json, Router};

use crate::error::Result;
use crate::AppState;

use super::calculators::{BASE_RATE, OPERATING_WEEKS_PER_YEAR};
use super::requests::QuoteFormRequest;
use super::responses::{MoneyResponse, PricingTablesResponse, QuoteResponse, WeightTableResponse};
use super::services;
use super::weights::{
    HOUR_WEIGHTS, MEMBER_WEIGHTS, NEAR_LOCATION_WEIGHT, REMOTE_LOCATION_WEIGHT, VISIT_WEIGHTS,
};

/// Pricing API router, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(calculate_quote))
        .route("/weights", get(weight_tables))
}

/// Price a submitted quote form; unreadable bodies get the same error envelope as invalid ones
async fn calculate_quote(
    payload: std::result::Result<Json<QuoteFormRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(form) = payload?;
    let response = services::quote(&form)?;
    Ok(Json(response))
}

/// Publish the weight tables and constants used for pricing
async fn weight_tables() -> Json<PricingTablesResponse> {
    Json(PricingTablesResponse {
        base_rate: MoneyResponse::quoted(BASE_RATE),
        operating_weeks_per_year: OPERATING_WEEKS_PER_YEAR,
        members: WeightTableResponse::from(&MEMBER_WEIGHTS),
        weekly_visits: WeightTableResponse::from(&VISIT_WEIGHTS),
        hours_per_visit: WeightTableResponse::from(&HOUR_WEIGHTS),
        near_location_weight: NEAR_LOCATION_WEIGHT,
        remote_location_weight: REMOTE_LOCATION_WEIGHT,
    })
}
