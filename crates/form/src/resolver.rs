use api_types::Id;
use api_types::lookup::{PaymentMethod, RubricItem};

use crate::{FormState, LookupSet};

/// Dependent lookup tracks, each driven by one governing selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependentTrack {
    RubricItems,
    PaymentMethods,
}

/// Handle for a dependent fetch requested by a selection transition.
///
/// The caller fetches the set for [`id`](Self::id) and hands the result back
/// together with the ticket. A ticket from a transition that a newer
/// selection has since superseded no longer applies; its result is dropped
/// on arrival.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub track: DependentTrack,
    pub id: Id,
    generation: u64,
}

impl FormState {
    /// Records an expense-type selection.
    ///
    /// Returns the ticket for the rubric-item fetch the caller must issue,
    /// or `None` when the id is already selected: re-selection keeps the
    /// current rubric set and a still-valid rubric selection untouched.
    pub fn select_expense_type(&mut self, id: Id) -> Option<FetchTicket> {
        if self.draft.expense_type_id == Some(id) {
            return None;
        }
        self.draft.expense_type_id = Some(id);

        // A rubric item owned by another expense type is stale from here on.
        if let Some(selected) = self.draft.rubric_item_id {
            match self.rubric_items.get(selected) {
                Some(item) if item.expense_type_id == id => {}
                _ => self.draft.rubric_item_id = None,
            }
        }

        self.rubric_generation += 1;
        Some(FetchTicket {
            track: DependentTrack::RubricItems,
            id,
            generation: self.rubric_generation,
        })
    }

    /// Records a carrier selection.
    ///
    /// Payment methods do not name their owning carrier, so a carrier change
    /// drops the payment-method selection unconditionally.
    pub fn select_carrier(&mut self, id: Id) -> Option<FetchTicket> {
        if self.draft.carrier_id == Some(id) {
            return None;
        }
        self.draft.carrier_id = Some(id);
        self.draft.payment_method_id = None;

        self.payment_generation += 1;
        Some(FetchTicket {
            track: DependentTrack::PaymentMethods,
            id,
            generation: self.payment_generation,
        })
    }

    /// Re-issues the rubric-item fetch for the current expense type, e.g.
    /// after a failed load. `None` when no expense type is selected.
    pub fn refresh_rubric_items(&mut self) -> Option<FetchTicket> {
        let id = self.draft.expense_type_id?;
        self.rubric_generation += 1;
        Some(FetchTicket {
            track: DependentTrack::RubricItems,
            id,
            generation: self.rubric_generation,
        })
    }

    /// Re-issues the payment-method fetch for the current carrier.
    pub fn refresh_payment_methods(&mut self) -> Option<FetchTicket> {
        let id = self.draft.carrier_id?;
        self.payment_generation += 1;
        Some(FetchTicket {
            track: DependentTrack::PaymentMethods,
            id,
            generation: self.payment_generation,
        })
    }

    /// Installs a fetched rubric set.
    ///
    /// Returns `false` when the ticket was superseded; the items are dropped
    /// and nothing changes. On apply, a rubric selection missing from the
    /// new set is cleared.
    pub fn apply_rubric_items(&mut self, ticket: FetchTicket, items: Vec<RubricItem>) -> bool {
        if ticket.track != DependentTrack::RubricItems
            || ticket.generation != self.rubric_generation
        {
            return false;
        }

        self.rubric_items = LookupSet::from_items(items);
        if let Some(selected) = self.draft.rubric_item_id
            && !self.rubric_items.contains(selected)
        {
            self.draft.rubric_item_id = None;
        }
        true
    }

    /// Installs a fetched payment-method set; same supersede rules as
    /// [`FormState::apply_rubric_items`].
    pub fn apply_payment_methods(&mut self, ticket: FetchTicket, items: Vec<PaymentMethod>) -> bool {
        if ticket.track != DependentTrack::PaymentMethods
            || ticket.generation != self.payment_generation
        {
            return false;
        }

        self.payment_methods = LookupSet::from_items(items);
        if let Some(selected) = self.draft.payment_method_id
            && !self.payment_methods.contains(selected)
        {
            self.draft.payment_method_id = None;
        }
        true
    }
}
