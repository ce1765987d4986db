//! Turns the result of applying a [Mutation] into the response for the htmx form.

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Response},
};
use axum_htmx::HX_TRIGGER;
use maud::html;

use crate::{
    AppState,
    alert::Alert,
    expense::ledger::{Ledger, Mutation, lock_ledger},
};

/// The htmx event sent to the page after the expense list changes.
pub const EXPENSES_CHANGED_EVENT: &str = "expenses-changed";

/// The state needed by the handlers that read or change the expense list.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The in-memory list of expenses.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Apply `mutation` to `ledger` and render the alert for the result.
///
/// On success the response closes the modal and triggers
/// [EXPENSES_CHANGED_EVENT] so the dashboard reloads its content.
/// On failure the modal stays open and an error alert is shown.
pub fn apply_mutation(ledger: &Mutex<Ledger>, mutation: Mutation) -> Response {
    let outcome = lock_ledger(ledger).and_then(|mut ledger| ledger.apply(mutation));

    match outcome {
        Ok(outcome) => {
            let alert = Alert::SuccessSimple {
                message: outcome.message(),
            };

            (
                [(HX_TRIGGER, EXPENSES_CHANGED_EVENT)],
                html! {
                    (alert.into_html())
                    div id="modal-container" hx-swap-oob="true" {}
                },
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
