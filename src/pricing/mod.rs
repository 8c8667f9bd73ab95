//! Pricing engine module for in-house service quotes.
//!
//! Resolves weights for members, visit frequency, visit duration and
//! location, composes them with the base rate, tax and management fee,
//! and annualizes the per-visit price.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod weights;

// Re-export commonly used items
pub use calculators::{annual_cost, price_per_visit, round_money};
pub use models::{QuoteRequest, QuoteResult};
pub use routes::router;
pub use services::{quote, PricingError};
pub use weights::Location;
