use std::collections::BTreeMap;

use api_types::Id;
use form::{ExpenseDraft, FetchTicket, FieldErrors, FormState, Validated};

use crate::{
    ApiClient,
    error::{LookupError, LookupResource, SubmitError},
};

/// Outcome of a submit attempt that did not fail on the wire.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the expense; the draft has been reset.
    Submitted,
    /// Validation rejected the draft; no request was issued.
    Rejected(FieldErrors),
}

/// One "create expense" form session.
///
/// Owns the draft and the lookup sets for the session's lifetime and drives
/// every fetch the cascading selections need. The embedding presentation
/// layer reads state through [`form`](Self::form) and
/// [`section_error`](Self::section_error), and pushes user input through
/// [`draft_mut`](Self::draft_mut) and the selection methods.
pub struct ExpenseFormSession {
    api: ApiClient,
    form: FormState,
    section_errors: BTreeMap<LookupResource, String>,
}

impl ExpenseFormSession {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            form: FormState::new(),
            section_errors: BTreeMap::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Text inputs and the non-governing selections; expense type and
    /// carrier go through the `select_*` methods instead.
    pub fn draft_mut(&mut self) -> &mut ExpenseDraft {
        self.form.draft_mut()
    }

    /// Error message for a reference-data section whose last fetch failed.
    pub fn section_error(&self, resource: LookupResource) -> Option<&str> {
        self.section_errors.get(&resource).map(String::as_str)
    }

    /// Loads the non-dependent reference data.
    ///
    /// A failing section is recorded under its resource and does not block
    /// the others; the session stays usable and the section can be retried
    /// with [`ExpenseFormSession::retry_section`].
    pub async fn init(&mut self) {
        self.load_persons().await;
        self.load_expense_types().await;
        self.load_carriers().await;
    }

    /// Selects an expense type and reloads the rubric items scoped to it.
    pub async fn select_expense_type(&mut self, id: Id) {
        if let Some(ticket) = self.form.select_expense_type(id) {
            self.run_rubric_fetch(ticket).await;
        }
    }

    /// Selects a carrier and reloads the payment methods scoped to it.
    pub async fn select_carrier(&mut self, id: Id) {
        if let Some(ticket) = self.form.select_carrier(id) {
            self.run_payment_fetch(ticket).await;
        }
    }

    /// Re-fetches one failed section; dependent sections re-fetch for the
    /// current governing selection, if any.
    pub async fn retry_section(&mut self, resource: LookupResource) {
        match resource {
            LookupResource::Persons => self.load_persons().await,
            LookupResource::ExpenseTypes => self.load_expense_types().await,
            LookupResource::Carriers => self.load_carriers().await,
            LookupResource::RubricItems => {
                if let Some(ticket) = self.form.refresh_rubric_items() {
                    self.run_rubric_fetch(ticket).await;
                }
            }
            LookupResource::PaymentMethods => {
                if let Some(ticket) = self.form.refresh_payment_methods() {
                    self.run_payment_fetch(ticket).await;
                }
            }
        }
    }

    /// Validates the draft and, when valid, issues exactly one create call.
    ///
    /// On a 2xx answer the draft is reset for the next expense; on any
    /// failure the draft is kept unmodified so the user can retry. No
    /// automatic retry happens here.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let payload = match self.form.validate() {
            Validated::Valid(payload) => payload,
            Validated::Invalid(errors) => return Ok(SubmitOutcome::Rejected(errors)),
        };

        match self.api.create_expense(&payload).await {
            Ok(()) => {
                tracing::debug!("expense created");
                self.form.reset_draft();
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                tracing::warn!("expense submission failed: {err}");
                Err(err)
            }
        }
    }

    async fn load_persons(&mut self) {
        match self.api.fetch_persons().await {
            Ok(items) => {
                self.form.load_persons(items);
                self.section_errors.remove(&LookupResource::Persons);
            }
            Err(err) => self.record_lookup_error(err),
        }
    }

    async fn load_expense_types(&mut self) {
        match self.api.fetch_expense_types().await {
            Ok(items) => {
                self.form.load_expense_types(items);
                self.section_errors.remove(&LookupResource::ExpenseTypes);
            }
            Err(err) => self.record_lookup_error(err),
        }
    }

    async fn load_carriers(&mut self) {
        match self.api.fetch_carriers().await {
            Ok(items) => {
                self.form.load_carriers(items);
                self.section_errors.remove(&LookupResource::Carriers);
            }
            Err(err) => self.record_lookup_error(err),
        }
    }

    async fn run_rubric_fetch(&mut self, ticket: FetchTicket) {
        match self.api.fetch_rubric_items(ticket.id).await {
            Ok(items) => {
                if self.form.apply_rubric_items(ticket, items) {
                    self.section_errors.remove(&LookupResource::RubricItems);
                } else {
                    tracing::debug!(
                        expense_type_id = ticket.id,
                        "superseded rubric-item result dropped"
                    );
                }
            }
            Err(err) => self.record_lookup_error(err),
        }
    }

    async fn run_payment_fetch(&mut self, ticket: FetchTicket) {
        match self.api.fetch_payment_methods(ticket.id).await {
            Ok(items) => {
                if self.form.apply_payment_methods(ticket, items) {
                    self.section_errors.remove(&LookupResource::PaymentMethods);
                } else {
                    tracing::debug!(
                        carrier_id = ticket.id,
                        "superseded payment-method result dropped"
                    );
                }
            }
            Err(err) => self.record_lookup_error(err),
        }
    }

    fn record_lookup_error(&mut self, err: LookupError) {
        tracing::warn!(resource = err.resource.as_str(), "lookup failed: {}", err.cause);
        self.section_errors.insert(err.resource, err.cause.to_string());
    }
}
