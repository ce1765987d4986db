//! Defines the endpoint for creating a new expense.

use axum::{extract::State, response::Response};
use axum_extra::extract::Form;

use crate::expense::{
    ledger::Mutation,
    mutation::ExpenseForm,
    response::{LedgerState, apply_mutation},
};

/// A route handler for creating a new expense.
///
/// Responds with an alert, and on success closes the modal and tells the
/// dashboard to reload.
pub async fn create_expense_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    apply_mutation(&state.ledger, Mutation::Create(form))
}
