//! Defines the endpoint for getting the current expense list as JSON.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::expense::{ledger::lock_ledger, response::LedgerState};

/// A route handler that returns a snapshot of every expense in insertion order.
pub async fn list_expenses_endpoint(State(state): State<LedgerState>) -> Response {
    match lock_ledger(&state.ledger) {
        Ok(ledger) => Json(ledger.snapshot()).into_response(),
        Err(error) => error.into_response(),
    }
}
