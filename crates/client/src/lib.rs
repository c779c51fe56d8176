//! HTTP side of the "create expense" flow.
//!
//! A thin client over the backend REST API: the five reference-data lookups,
//! the expense create call, and [`ExpenseFormSession`], which wires
//! [`form::FormState`] to the network. The session fetches dependent sets
//! when a governing selection changes and discards superseded results on
//! arrival.

pub use crate::config::ClientConfig;
pub use api::ApiClient;
pub use error::{ApiError, ConfigError, LookupError, LookupResource, SubmitError};
pub use session::{ExpenseFormSession, SubmitOutcome};

mod api;
mod config;
mod error;
mod lookup;
mod session;
mod submit;
