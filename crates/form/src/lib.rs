//! Form engine for the "create expense" flow.
//!
//! The crate is pure state and rules: it owns the draft being edited, the
//! reference-data sets that back every selection control, the dependent
//! selection tracks (expense type → rubric items, carrier → payment
//! methods) and the validator. All I/O lives in the `client` crate; fetches
//! requested here are described by [`FetchTicket`]s and their results are
//! handed back through the `apply_*` methods, which discard anything a newer
//! selection has superseded.

use api_types::lookup::{Carrier, ExpenseType, PaymentMethod, Person, RubricItem};

pub use draft::ExpenseDraft;
pub use lookup_set::{LookupRecord, LookupSet};
pub use resolver::{DependentTrack, FetchTicket};
pub use validate::{Field, FieldErrors, Validated};

mod draft;
mod lookup_set;
mod resolver;
mod validate;

/// State of one "create expense" form session.
///
/// Owns the [`ExpenseDraft`] and every lookup set exclusively for the
/// session's lifetime. Non-governing inputs are edited directly on the
/// draft; the governing selections (expense type, carrier) must go through
/// [`FormState::select_expense_type`] and [`FormState::select_carrier`] so
/// the dependent sets and selections stay consistent.
#[derive(Debug, Default)]
pub struct FormState {
    draft: ExpenseDraft,
    persons: LookupSet<Person>,
    expense_types: LookupSet<ExpenseType>,
    rubric_items: LookupSet<RubricItem>,
    carriers: LookupSet<Carrier>,
    payment_methods: LookupSet<PaymentMethod>,
    rubric_generation: u64,
    payment_generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    /// Mutable access for text inputs and the non-governing selections.
    ///
    /// Writing `expense_type_id` or `carrier_id` here skips dependent-set
    /// resolution; use the `select_*` methods for those two fields.
    pub fn draft_mut(&mut self) -> &mut ExpenseDraft {
        &mut self.draft
    }

    /// Discards the draft after a successful submit.
    pub fn reset_draft(&mut self) {
        self.draft = ExpenseDraft::default();
    }

    pub fn load_persons(&mut self, items: Vec<Person>) {
        self.persons = LookupSet::from_items(items);
    }

    pub fn load_expense_types(&mut self, items: Vec<ExpenseType>) {
        self.expense_types = LookupSet::from_items(items);
    }

    pub fn load_carriers(&mut self, items: Vec<Carrier>) {
        self.carriers = LookupSet::from_items(items);
    }

    pub fn persons(&self) -> &LookupSet<Person> {
        &self.persons
    }

    pub fn expense_types(&self) -> &LookupSet<ExpenseType> {
        &self.expense_types
    }

    pub fn rubric_items(&self) -> &LookupSet<RubricItem> {
        &self.rubric_items
    }

    pub fn carriers(&self) -> &LookupSet<Carrier> {
        &self.carriers
    }

    pub fn payment_methods(&self) -> &LookupSet<PaymentMethod> {
        &self.payment_methods
    }
}
