use api_types::Id;
use api_types::expense::ExpenseStatus;

/// The in-progress expense being edited in one form session.
///
/// Text inputs are held raw, exactly as typed; coercion to numbers and
/// dates happens in validation. Selection fields hold backend ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub observation: String,
    pub amount: String,
    pub person_id: Option<Id>,
    pub expense_type_id: Option<Id>,
    pub rubric_item_id: Option<Id>,
    pub carrier_id: Option<Id>,
    pub payment_method_id: Option<Id>,
    /// ISO date input (`YYYY-MM-DD`).
    pub date: String,
    pub status: Option<ExpenseStatus>,
    pub installments: String,
}
