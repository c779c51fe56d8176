use std::net::SocketAddr;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use api_types::expense::ExpenseStatus;
use client::{ApiClient, ClientConfig, ExpenseFormSession, LookupResource, SubmitOutcome};
use form::Field;

#[derive(Clone, Default)]
struct Backend {
    fail_persons: Arc<AtomicBool>,
    reject_expense: Arc<AtomicBool>,
    expense_posts: Arc<AtomicUsize>,
    last_expense: Arc<Mutex<Option<Value>>>,
}

async fn persons(State(backend): State<Backend>) -> axum::response::Response {
    if backend.fail_persons.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "lookup unavailable"})),
        )
            .into_response();
    }
    Json(json!([
        {"id": 7, "name": "Patrick"},
        {"id": 8, "name": "Vanessa"},
    ]))
    .into_response()
}

async fn expense_types() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Moradia"},
        {"id": 2, "name": "Transporte"},
    ]))
}

async fn rubric_items(Path(expense_type_id): Path<i64>) -> Json<Value> {
    Json(json!([
        {
            "id": expense_type_id * 10 + 1,
            "name": format!("Rubrica {expense_type_id}.1"),
            "expenseTypeId": expense_type_id,
        },
        {
            "id": expense_type_id * 10 + 2,
            "name": format!("Rubrica {expense_type_id}.2"),
            "expenseTypeId": expense_type_id,
        },
    ]))
}

async fn carriers() -> Json<Value> {
    Json(json!([
        {"id": 4, "description": "Nubank", "carrierTypeId": 1, "personId": 7},
        {"id": 5, "description": "Itaú", "carrierTypeId": 1, "personId": 8},
    ]))
}

async fn payment_methods(Path(carrier_id): Path<i64>) -> Json<Value> {
    Json(json!([
        {"id": carrier_id * 10 + 1, "name": "Crédito"},
        {"id": carrier_id * 10 + 2, "name": "Débito"},
    ]))
}

async fn create_expense(
    State(backend): State<Backend>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    backend.expense_posts.fetch_add(1, Ordering::SeqCst);
    *backend.last_expense.lock().unwrap() = Some(body);

    if backend.reject_expense.load(Ordering::SeqCst) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "despesa rejeitada"})),
        )
            .into_response();
    }
    StatusCode::CREATED.into_response()
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/Lookup/persons", get(persons))
        .route("/api/Lookup/expense-types", get(expense_types))
        .route("/api/Lookup/rubric-items/{expense_type_id}", get(rubric_items))
        .route("/api/Lookup/carriers", get(carriers))
        .route("/api/Lookup/payment-methods/{carrier_id}", get(payment_methods))
        .route("/api/Expense", post(create_expense))
        .with_state(backend)
}

async fn spawn_backend(backend: Backend) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(backend)).await.unwrap();
    });
    addr
}

async fn start_session(backend: Backend) -> ExpenseFormSession {
    let addr = spawn_backend(backend).await;
    let config = ClientConfig {
        base_url: format!("http://{addr}/api"),
    };
    let api = ApiClient::new(&config).unwrap();
    ExpenseFormSession::new(api)
}

/// Drives the session to a fully valid draft: expense type 1, carrier 4 and
/// their dependent selections.
async fn fill_valid_draft(session: &mut ExpenseFormSession) {
    session.select_expense_type(1).await;
    session.select_carrier(4).await;

    let draft = session.draft_mut();
    draft.observation = "Aluguel de maio".to_string();
    draft.amount = "1500,00".to_string();
    draft.person_id = Some(7);
    draft.rubric_item_id = Some(11);
    draft.payment_method_id = Some(41);
    draft.date = "2024-05-01".to_string();
    draft.status = Some(ExpenseStatus::Pago);
    draft.installments = "2".to_string();
}

#[tokio::test]
async fn init_loads_reference_data() {
    let mut session = start_session(Backend::default()).await;
    session.init().await;

    assert_eq!(session.form().persons().len(), 2);
    assert_eq!(session.form().expense_types().len(), 2);
    assert_eq!(session.form().carriers().len(), 2);
    assert!(session.section_error(LookupResource::Persons).is_none());
}

#[tokio::test]
async fn expense_type_selection_loads_scoped_rubric_items() {
    let mut session = start_session(Backend::default()).await;
    session.init().await;

    session.select_expense_type(1).await;
    let ids: Vec<_> = session.form().rubric_items().items().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![11, 12]);

    session.select_expense_type(2).await;
    let ids: Vec<_> = session.form().rubric_items().items().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![21, 22]);
}

#[tokio::test]
async fn carrier_change_replaces_payment_methods_and_clears_choice() {
    let mut session = start_session(Backend::default()).await;
    session.init().await;

    session.select_carrier(4).await;
    session.draft_mut().payment_method_id = Some(41);

    session.select_carrier(5).await;
    assert_eq!(session.form().draft().payment_method_id, None);
    assert!(session.form().payment_methods().contains(51));
    assert!(!session.form().payment_methods().contains(41));
}

#[tokio::test]
async fn valid_draft_submits_once_and_resets() {
    let backend = Backend::default();
    let mut session = start_session(backend.clone()).await;
    session.init().await;
    fill_valid_draft(&mut session).await;

    let outcome = session.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(backend.expense_posts.load(Ordering::SeqCst), 1);

    let body = backend.last_expense.lock().unwrap().clone().unwrap();
    assert_eq!(body["observation"], "Aluguel de maio");
    assert_eq!(body["amount"], 1500.0);
    assert_eq!(body["personID"], 7);
    assert_eq!(body["expenseTypeID"], 1);
    assert_eq!(body["rubricItemID"], 11);
    assert_eq!(body["carrierID"], 4);
    assert_eq!(body["paymentMethodID"], 41);
    assert_eq!(body["date"], "2024-05-01");
    assert_eq!(body["status"], "Pago");
    assert_eq!(body["installments"], 2);

    // Session is ready for the next expense.
    assert_eq!(session.form().draft().observation, "");
    assert_eq!(session.form().draft().person_id, None);
}

#[tokio::test]
async fn invalid_draft_is_rejected_without_a_request() {
    let backend = Backend::default();
    let mut session = start_session(backend.clone()).await;
    session.init().await;
    fill_valid_draft(&mut session).await;
    session.draft_mut().observation = "a".to_string();

    let outcome = session.submit().await.unwrap();
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected validation rejection");
    };
    assert!(errors.contains_key(&Field::Observation));
    assert_eq!(backend.expense_posts.load(Ordering::SeqCst), 0);

    // The draft is untouched for the user to fix.
    assert_eq!(session.form().draft().amount, "1500,00");
}

#[tokio::test]
async fn backend_rejection_keeps_the_draft() {
    let backend = Backend::default();
    backend.reject_expense.store(true, Ordering::SeqCst);

    let mut session = start_session(backend.clone()).await;
    session.init().await;
    fill_valid_draft(&mut session).await;

    let err = session.submit().await.unwrap_err();
    assert!(err.to_string().contains("despesa rejeitada"));
    assert_eq!(backend.expense_posts.load(Ordering::SeqCst), 1);
    assert_eq!(session.form().draft().observation, "Aluguel de maio");

    // The user retries without editing anything.
    backend.reject_expense.store(false, Ordering::SeqCst);
    let outcome = session.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(backend.expense_posts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_section_is_isolated_and_retryable() {
    let backend = Backend::default();
    backend.fail_persons.store(true, Ordering::SeqCst);

    let mut session = start_session(backend.clone()).await;
    session.init().await;

    // Only the persons section failed; the rest of the form keeps working.
    let message = session.section_error(LookupResource::Persons).unwrap();
    assert!(message.contains("lookup unavailable"));
    assert_eq!(session.form().persons().len(), 0);
    assert_eq!(session.form().expense_types().len(), 2);

    backend.fail_persons.store(false, Ordering::SeqCst);
    session.retry_section(LookupResource::Persons).await;
    assert!(session.section_error(LookupResource::Persons).is_none());
    assert_eq!(session.form().persons().len(), 2);
}

#[tokio::test]
async fn dependent_retry_refetches_for_current_selection() {
    let mut session = start_session(Backend::default()).await;
    session.init().await;

    // No expense type selected yet: retry has nothing to fetch.
    session.retry_section(LookupResource::RubricItems).await;
    assert!(session.form().rubric_items().is_empty());

    session.select_expense_type(2).await;
    session.retry_section(LookupResource::RubricItems).await;
    assert!(session.form().rubric_items().contains(21));
}
