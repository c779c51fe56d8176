use api_types::Id;
use api_types::lookup::{Carrier, ExpenseType, PaymentMethod, Person, RubricItem};

use crate::{
    ApiClient,
    error::{LookupError, LookupResource},
};

/// Reference-data lookups. Each call is a single request/response; failures
/// carry the affected [`LookupResource`] so the session can report them per
/// section.
impl ApiClient {
    pub async fn fetch_persons(&self) -> Result<Vec<Person>, LookupError> {
        self.get_json("Lookup/persons").await.map_err(|cause| LookupError {
            resource: LookupResource::Persons,
            cause,
        })
    }

    pub async fn fetch_expense_types(&self) -> Result<Vec<ExpenseType>, LookupError> {
        self.get_json("Lookup/expense-types")
            .await
            .map_err(|cause| LookupError {
                resource: LookupResource::ExpenseTypes,
                cause,
            })
    }

    /// Fetches the rubric items scoped to one expense type.
    pub async fn fetch_rubric_items(
        &self,
        expense_type_id: Id,
    ) -> Result<Vec<RubricItem>, LookupError> {
        self.get_json(&format!("Lookup/rubric-items/{expense_type_id}"))
            .await
            .map_err(|cause| LookupError {
                resource: LookupResource::RubricItems,
                cause,
            })
    }

    pub async fn fetch_carriers(&self) -> Result<Vec<Carrier>, LookupError> {
        self.get_json("Lookup/carriers")
            .await
            .map_err(|cause| LookupError {
                resource: LookupResource::Carriers,
                cause,
            })
    }

    /// Fetches the payment methods scoped to one carrier.
    pub async fn fetch_payment_methods(
        &self,
        carrier_id: Id,
    ) -> Result<Vec<PaymentMethod>, LookupError> {
        self.get_json(&format!("Lookup/payment-methods/{carrier_id}"))
            .await
            .map_err(|cause| LookupError {
                resource: LookupResource::PaymentMethods,
                cause,
            })
    }
}
