use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numeric id the backend uses for every record.
pub type Id = i64;

pub mod lookup {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Person {
        pub id: Id,
        pub name: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseType {
        pub id: Id,
        pub name: String,
    }

    /// Rubric item scoped to one expense type.
    ///
    /// The active set served by the backend always belongs to a single
    /// expense type; `expense_type_id` names the owner.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RubricItem {
        pub id: Id,
        pub name: String,
        pub expense_type_id: Id,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Carrier {
        pub id: Id,
        pub description: String,
        pub carrier_type_id: Id,
        pub person_id: Id,
    }

    /// Payment method scoped to one carrier.
    ///
    /// Unlike [`RubricItem`], the record does not carry its owning carrier;
    /// the set it arrived in is the only scope information available.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PaymentMethod {
        pub id: Id,
        pub name: String,
    }
}

pub mod expense {
    use super::*;

    /// Payment status of an expense. Fixed enumeration, never fetched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum ExpenseStatus {
        #[serde(rename = "A pagar")]
        APagar,
        #[serde(rename = "Pago")]
        Pago,
    }

    impl ExpenseStatus {
        pub const ALL: [ExpenseStatus; 2] = [Self::APagar, Self::Pago];

        /// Returns the label used on the wire and in selection controls.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::APagar => "A pagar",
                Self::Pago => "Pago",
            }
        }
    }

    /// Request body for `POST Expense`.
    ///
    /// Field casing follows the backend contract exactly: the id fields are
    /// serialized with an upper-case `ID` suffix (`personID`, ...).
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub observation: String,
        pub amount: f64,
        #[serde(rename = "personID")]
        pub person_id: Id,
        #[serde(rename = "expenseTypeID")]
        pub expense_type_id: Id,
        #[serde(rename = "rubricItemID")]
        pub rubric_item_id: Id,
        #[serde(rename = "carrierID")]
        pub carrier_id: Id,
        #[serde(rename = "paymentMethodID")]
        pub payment_method_id: Id,
        /// ISO calendar date (`YYYY-MM-DD`).
        pub date: NaiveDate,
        pub status: ExpenseStatus,
        pub installments: u32,
    }
}
