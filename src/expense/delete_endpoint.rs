//! Defines the endpoint for deleting expenses by ID.

use axum::{extract::State, response::Response};
use axum_extra::extract::Form;

use crate::expense::{
    ledger::Mutation,
    mutation::DeleteExpensesForm,
    response::{LedgerState, apply_mutation},
};

/// A route handler for deleting every expense whose ID is listed in the form.
///
/// IDs that do not match an expense are skipped, the alert reports how many
/// expenses were actually removed.
pub async fn delete_expenses_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<DeleteExpensesForm>,
) -> Response {
    apply_mutation(&state.ledger, Mutation::Delete(form))
}
