//! Defines the route handler for the modal form for adding an expense.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, endpoints,
    expense::{
        core::ExpenseKind,
        form::{ExpenseFormDefaults, expense_form_fields, modal},
    },
    html::BUTTON_PRIMARY_STYLE,
    timezone::local_today,
};

/// The state needed for the add expense form.
#[derive(Debug, Clone)]
pub struct CreateExpensePageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the modal form for adding an expense, dated today by default.
pub async fn get_create_expense_modal(State(state): State<CreateExpensePageState>) -> Response {
    match local_today(&state.local_timezone) {
        Ok(today) => create_expense_modal(today).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn create_expense_modal(today: Date) -> Markup {
    let fields = expense_form_fields(&ExpenseFormDefaults {
        amount: None,
        kind: ExpenseKind::Expense,
        category: None,
        date: today,
        autofocus_amount: true,
    });

    let form = html! {
        form
            hx-post=(endpoints::EXPENSES_API)
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            (fields)

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    };

    modal("Add Expense", "Add a new income or expense entry", &form)
}
