//! Defines the route handler for the modal form for deleting expenses.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{core::ExpenseId, form::modal, ledger::lock_ledger, response::LedgerState},
    html::{BUTTON_DELETE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Renders the modal form for deleting expenses by their IDs.
pub async fn get_delete_expense_modal(State(state): State<LedgerState>) -> Response {
    let ids: Vec<ExpenseId> = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger
            .expenses()
            .iter()
            .map(|expense| expense.display_id)
            .collect(),
        Err(error) => return error.into_alert_response(),
    };

    delete_expense_modal(&ids).into_response()
}

fn delete_expense_modal(ids: &[ExpenseId]) -> Markup {
    let available_ids = ids
        .iter()
        .map(ExpenseId::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let form = html! {
        form
            hx-post=(endpoints::DELETE_EXPENSES_API)
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="ids"
                    class=(FORM_LABEL_STYLE)
                {
                    "Expense IDs"
                }

                input
                    name="ids"
                    id="ids"
                    type="text"
                    placeholder="e.g. 1, 2, 3"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);

                p class="mt-2 text-sm text-gray-500 dark:text-gray-400"
                {
                    @if available_ids.is_empty() {
                        "There are no expenses to delete."
                    } @else {
                        "Separate IDs with commas. Current IDs: " (available_ids)
                    }
                }
            }

            p
                id="delete-warning"
                class="text-sm font-medium text-red-600 dark:text-red-400"
            {
                "Warning: This action cannot be undone"
            }

            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete Expense" }
        }
    };

    modal(
        "Delete Expense",
        "Delete one or more expense entries",
        &form,
    )
}
