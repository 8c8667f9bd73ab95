//! Request DTOs for pricing API endpoints.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use super::weights::Location;

/// Quote form as submitted by the client.
///
/// Counts are signed so out-of-domain values reach validation instead of
/// failing deserialization. Missing or blank fields take the form's defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "QuoteFormFields")]
pub struct QuoteFormRequest {
    pub client_name: String,
    pub branches: i64,
    pub members: i64,
    pub hours_per_visit: i64,
    pub weekly_visits: i64,
    pub location: Location,
    pub add_tax: bool,
    pub tax_percentage: Decimal,
    pub add_management_fee: bool,
    pub management_fee_percentage: Decimal,
}

/// Wire shape of the form; `None` means the field was missing or blank
#[derive(Debug, Deserialize)]
struct QuoteFormFields {
    #[serde(default)]
    client_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    branches: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    members: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    hours_per_visit: Option<i64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    weekly_visits: Option<i64>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    add_tax: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    tax_percentage: Option<Decimal>,
    #[serde(default)]
    add_management_fee: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    management_fee_percentage: Option<Decimal>,
}

impl From<QuoteFormFields> for QuoteFormRequest {
    fn from(fields: QuoteFormFields) -> Self {
        Self {
            client_name: fields.client_name.unwrap_or_else(default_client_name),
            branches: fields.branches.unwrap_or_else(default_branches),
            members: fields.members.unwrap_or_else(default_members),
            hours_per_visit: fields.hours_per_visit.unwrap_or_else(default_hours_per_visit),
            weekly_visits: fields.weekly_visits.unwrap_or_else(default_weekly_visits),
            location: fields.location.unwrap_or_default(),
            add_tax: fields.add_tax.unwrap_or_else(default_enabled),
            tax_percentage: fields.tax_percentage.unwrap_or_else(default_percentage),
            add_management_fee: fields.add_management_fee.unwrap_or_else(default_enabled),
            management_fee_percentage: fields
                .management_fee_percentage
                .unwrap_or_else(default_percentage),
        }
    }
}

/// Accept a number or a numeric string; an empty string or null is `None`.
///
/// HTML forms submit cleared number inputs as `field=`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    struct BlankOrNumber<T>(PhantomData<T>);

    impl<T> BlankOrNumber<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        fn parse<E: de::Error>(text: &str) -> Result<Option<T>, E> {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<T>().map(Some).map_err(E::custom)
        }
    }

    impl<'de, T> Visitor<'de> for BlankOrNumber<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string or an empty string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Self::parse(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Self::parse(&v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Self::parse(&v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Self::parse(&v.to_string())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(BlankOrNumber(PhantomData))
}

fn default_client_name() -> String {
    " ".to_string()
}

fn default_branches() -> i64 {
    3
}

fn default_members() -> i64 {
    100
}

fn default_hours_per_visit() -> i64 {
    2
}

fn default_weekly_visits() -> i64 {
    1
}

fn default_enabled() -> bool {
    true
}

fn default_percentage() -> Decimal {
    dec!(10)
}

impl Default for QuoteFormRequest {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            branches: default_branches(),
            members: default_members(),
            hours_per_visit: default_hours_per_visit(),
            weekly_visits: default_weekly_visits(),
            location: Location::default(),
            add_tax: default_enabled(),
            tax_percentage: default_percentage(),
            add_management_fee: default_enabled(),
            management_fee_percentage: default_percentage(),
        }
    }
}
