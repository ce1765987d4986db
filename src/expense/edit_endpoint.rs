//! Defines the endpoint for updating an existing expense.

use axum::{extract::State, response::Response};
use axum_extra::extract::Form;

use crate::expense::{
    ledger::Mutation,
    mutation::UpdateExpenseForm,
    response::{LedgerState, apply_mutation},
};

/// A route handler for updating the expense selected in the form.
pub async fn edit_expense_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<UpdateExpenseForm>,
) -> Response {
    apply_mutation(&state.ledger, Mutation::Update(form))
}
