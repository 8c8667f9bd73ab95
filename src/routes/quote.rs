//! Quote page handler

use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};

use crate::error::Result;
use crate::pricing::calculators::CURRENCY;
use crate::pricing::requests::QuoteFormRequest;
use crate::pricing::{quote, Location, PricingError};
use crate::AppState;

/// Quote page template
#[derive(Template)]
#[template(path = "quote.html")]
struct QuotePageTemplate {
    site_title: String,
    form: QuoteFormRequest,
    is_remote: bool,
    has_quote: bool,
    cost_per_visit: String,
    annual_cost: String,
    currency: &'static str,
    errors: Vec<String>,
    has_errors: bool,
}

/// Quote page: the form is read from the query string and priced on every load.
///
/// An unreadable query re-renders the default form with the error listed.
pub async fn page(
    State(state): State<AppState>,
    query: std::result::Result<Query<QuoteFormRequest>, QueryRejection>,
) -> Result<Html<String>> {
    let (form, priced) = match query {
        Ok(Query(form)) => {
            let priced = quote(&form);
            (form, priced)
        }
        Err(rejection) => (
            QuoteFormRequest::default(),
            Err(PricingError::malformed(rejection.body_text())),
        ),
    };

    let (cost_per_visit, annual_cost, errors) = match priced {
        Ok(response) => (
            response.cost_per_visit.amount.to_string(),
            response.annual_cost.amount.to_string(),
            Vec::new(),
        ),
        Err(PricingError::InvalidInput { errors, .. }) => {
            (String::new(), String::new(), errors)
        }
    };

    let template = QuotePageTemplate {
        site_title: state.config.site_title.clone(),
        is_remote: form.location == Location::Remote,
        has_quote: errors.is_empty(),
        has_errors: !errors.is_empty(),
        form,
        cost_per_visit,
        annual_cost,
        currency: CURRENCY,
        errors,
    };

    Ok(Html(template.render()?))
}
