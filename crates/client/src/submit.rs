use api_types::expense::ExpenseNew;

use crate::{ApiClient, error::SubmitError};

impl ApiClient {
    /// Issues the create request for a validated expense.
    ///
    /// Exactly one `POST Expense`; any 2xx answer is success and no response
    /// body is required. Everything else (network failure, timeout, 4xx/5xx)
    /// surfaces as [`SubmitError`] and the caller keeps the draft.
    pub async fn create_expense(&self, payload: &ExpenseNew) -> Result<(), SubmitError> {
        self.post_json_unit("Expense", payload)
            .await
            .map_err(|cause| SubmitError { cause })
    }
}
