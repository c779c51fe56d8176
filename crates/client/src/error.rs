use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single HTTP exchange, shared by lookups and submission.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// Reference-data sections served by the lookup endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LookupResource {
    Persons,
    ExpenseTypes,
    RubricItems,
    Carriers,
    PaymentMethods,
}

impl LookupResource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Persons => "persons",
            Self::ExpenseTypes => "expense-types",
            Self::RubricItems => "rubric-items",
            Self::Carriers => "carriers",
            Self::PaymentMethods => "payment-methods",
        }
    }
}

impl fmt::Display for LookupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference-data fetch failed.
///
/// Reported per affected section; unrelated fields keep working and the
/// session stays alive.
#[derive(Debug, Error)]
#[error("lookup of {resource} failed: {cause}")]
pub struct LookupError {
    pub resource: LookupResource,
    #[source]
    pub cause: ApiError,
}

/// The create request failed; the draft is kept for a manual retry.
#[derive(Debug, Error)]
#[error("expense submission failed: {cause}")]
pub struct SubmitError {
    #[source]
    pub cause: ApiError,
}

/// Configuration / client construction failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid base_url: {0}")]
    BaseUrl(String),
}
