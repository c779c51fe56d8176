use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use api_types::expense::ExpenseNew;

use crate::FormState;

/// Form fields addressable by validation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Observation,
    Amount,
    Person,
    ExpenseType,
    RubricItem,
    Carrier,
    PaymentMethod,
    Date,
    Status,
    Installments,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Observation => "observation",
            Self::Amount => "amount",
            Self::Person => "person",
            Self::ExpenseType => "expenseType",
            Self::RubricItem => "rubricItem",
            Self::Carrier => "carrier",
            Self::PaymentMethod => "paymentMethod",
            Self::Date => "date",
            Self::Status => "status",
            Self::Installments => "installments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per failing field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Outcome of validating the full draft.
#[derive(Clone, Debug, PartialEq)]
pub enum Validated {
    /// Every rule passed; the coerced wire payload is ready to submit.
    Valid(ExpenseNew),
    /// At least one field failed; submission is blocked.
    Invalid(FieldErrors),
}

const OBSERVATION_MIN: usize = 2;
const OBSERVATION_MAX: usize = 50;

fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Inputs arrive with either decimal separator.
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

fn parse_installments(raw: &str) -> Option<u32> {
    let value = raw.trim().parse::<u32>().ok()?;
    (value >= 1).then_some(value)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

impl FormState {
    /// Validates the whole draft and coerces it into the wire payload.
    ///
    /// Runs synchronously on the submit attempt; every failing field gets
    /// its own message and nothing partial ever reaches the backend.
    pub fn validate(&self) -> Validated {
        let mut errors = FieldErrors::new();
        let draft = &self.draft;

        let observation = draft.observation.trim();
        let observation_len = observation.chars().count();
        if !(OBSERVATION_MIN..=OBSERVATION_MAX).contains(&observation_len) {
            errors.insert(
                Field::Observation,
                format!(
                    "A observação deve ter entre {OBSERVATION_MIN} e {OBSERVATION_MAX} caracteres."
                ),
            );
        }

        let amount = parse_amount(&draft.amount);
        if amount.is_none() {
            errors.insert(Field::Amount, "Insira um valor.".to_string());
        }

        let person_id = draft.person_id.filter(|&id| self.persons.contains(id));
        if person_id.is_none() {
            errors.insert(Field::Person, "Selecione uma pessoa.".to_string());
        }

        let expense_type_id = draft
            .expense_type_id
            .filter(|&id| self.expense_types.contains(id));
        if expense_type_id.is_none() {
            errors.insert(
                Field::ExpenseType,
                "Selecione um tipo de despesa.".to_string(),
            );
        }

        // The rubric item must be in the loaded set AND belong to the selected
        // expense type; while a dependent fetch is in flight the set can still
        // hold items of the previous type.
        let rubric_item_id = draft.rubric_item_id.filter(|&id| {
            self.rubric_items
                .get(id)
                .is_some_and(|item| Some(item.expense_type_id) == draft.expense_type_id)
        });
        if rubric_item_id.is_none() {
            errors.insert(
                Field::RubricItem,
                "Selecione um item de rubrica.".to_string(),
            );
        }

        let carrier_id = draft.carrier_id.filter(|&id| self.carriers.contains(id));
        if carrier_id.is_none() {
            errors.insert(Field::Carrier, "Selecione um portador.".to_string());
        }

        let payment_method_id = draft
            .payment_method_id
            .filter(|&id| self.payment_methods.contains(id));
        if payment_method_id.is_none() {
            errors.insert(
                Field::PaymentMethod,
                "Selecione uma forma de pagamento.".to_string(),
            );
        }

        let date = parse_date(&draft.date);
        if date.is_none() {
            errors.insert(Field::Date, "Insira uma data válida.".to_string());
        }

        if draft.status.is_none() {
            errors.insert(Field::Status, "Selecione um status.".to_string());
        }

        let installments = parse_installments(&draft.installments);
        if installments.is_none() {
            errors.insert(
                Field::Installments,
                "Insira o número de parcelas.".to_string(),
            );
        }

        match (
            amount,
            person_id,
            expense_type_id,
            rubric_item_id,
            carrier_id,
            payment_method_id,
            date,
            draft.status,
            installments,
        ) {
            (
                Some(amount),
                Some(person_id),
                Some(expense_type_id),
                Some(rubric_item_id),
                Some(carrier_id),
                Some(payment_method_id),
                Some(date),
                Some(status),
                Some(installments),
            ) if errors.is_empty() => Validated::Valid(ExpenseNew {
                observation: observation.to_string(),
                amount,
                person_id,
                expense_type_id,
                rubric_item_id,
                carrier_id,
                payment_method_id,
                date,
                status,
                installments,
            }),
            _ => Validated::Invalid(errors),
        }
    }
}
