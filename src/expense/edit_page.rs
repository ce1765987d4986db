//! Defines the route handler for the modal form for updating an expense.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, endpoints,
    expense::{
        core::{Expense, ExpenseId, ExpenseKind},
        form::{ExpenseFormDefaults, expense_form_fields, modal},
        ledger::{Ledger, lock_ledger},
        mutation::empty_string_as_none,
    },
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, format_currency},
    timezone::local_today,
};

/// The state needed for the update expense form.
#[derive(Debug, Clone)]
pub struct EditExpensePageState {
    /// The in-memory list of expenses.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for EditExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The expense to pre-fill the update form with.
#[derive(Debug, Default, Deserialize)]
pub struct EditExpenseQuery {
    /// The display ID of the selected expense.
    ///
    /// The select input in the form is named `target`, so changing the
    /// selection requests the form again with that name.
    #[serde(default, alias = "target", deserialize_with = "empty_string_as_none")]
    pub id: Option<ExpenseId>,
}

/// Renders the modal form for updating an expense.
///
/// If `id` matches an expense, that expense is selected and its values fill the form.
pub async fn get_edit_expense_modal(
    State(state): State<EditExpensePageState>,
    Query(query): Query<EditExpenseQuery>,
) -> Response {
    let expenses = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => return error.into_alert_response(),
    };

    let selected = query.id.and_then(|id| {
        let expense = expenses.iter().find(|expense| expense.display_id == id);

        if expense.is_none() {
            tracing::warn!("Update form requested for missing expense {id}");
        }

        expense
    });

    let date = match selected {
        Some(expense) => expense.date,
        None => match local_today(&state.local_timezone) {
            Ok(today) => today,
            Err(error) => return error.into_alert_response(),
        },
    };

    edit_expense_modal(&expenses, selected, date).into_response()
}

fn edit_expense_modal(
    expenses: &[Expense],
    selected: Option<&Expense>,
    date: Date,
) -> Markup {
    let selected_id = selected.map(|expense| expense.display_id);
    let fields = expense_form_fields(&ExpenseFormDefaults {
        amount: selected.map(Expense::amount_text),
        kind: selected.map_or(ExpenseKind::Expense, |expense| expense.kind),
        category: selected.map(|expense| expense.category.as_str()),
        date,
        autofocus_amount: false,
    });

    let form = html! {
        form
            hx-put=(endpoints::EXPENSES_API)
            hx-target="#alert-container"
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="target"
                    class=(FORM_LABEL_STYLE)
                {
                    "Expense"
                }

                select
                    name="target"
                    id="target"
                    hx-get=(endpoints::EDIT_EXPENSE_VIEW)
                    hx-trigger="change"
                    hx-target="#modal-container"
                    hx-target-error="#alert-container"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[selected_id.is_none()] { "Select an expense" }

                    @for expense in expenses {
                        option
                            value=(expense.display_id)
                            selected[Some(expense.display_id) == selected_id]
                        {
                            "ID " (expense.display_id) ": " (expense.category)
                            " - " (format_currency(expense.amount))
                        }
                    }
                }
            }

            (fields)

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Update Expense" }
        }
    };

    modal("Update Expense", "Update an existing expense entry", &form)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        expense::{Ledger, sample_expenses},
        html::format_currency,
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_status_ok, assert_valid_html,
            must_get_form, parse_html_fragment,
        },
    };

    use super::{EditExpensePageState, EditExpenseQuery, get_edit_expense_modal};

    fn sample_state() -> EditExpensePageState {
        EditExpensePageState {
            ledger: Arc::new(Mutex::new(Ledger::with_sample_data())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn selected_option(html: &Html) -> Option<String> {
        html.select(&Selector::parse("select[name=target] option[selected]").unwrap())
            .next()
            .and_then(|option| option.value().attr("value").map(str::to_owned))
    }

    #[tokio::test]
    async fn lists_every_expense() {
        let response =
            get_edit_expense_modal(State(sample_state()), Query(EditExpenseQuery::default())).await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-put");

        let options: Vec<String> = html
            .select(&Selector::parse("select[name=target] option").unwrap())
            .map(|option| option.text().collect())
            .collect();
        assert_eq!(options.len(), 6, "want placeholder plus 5 expenses, got {options:?}");
        assert_eq!(options[0], "Select an expense");
        assert_eq!(
            options[2],
            format!("ID 2: Food - {}", format_currency(50.0))
        );
        assert_eq!(selected_option(&html).as_deref(), Some(""));
    }

    #[tokio::test]
    async fn prefills_selected_expense() {
        let response = get_edit_expense_modal(
            State(sample_state()),
            Query(EditExpenseQuery { id: Some(3) }),
        )
        .await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_eq!(selected_option(&html).as_deref(), Some("3"));
        assert_form_input_with_value(&form, "amount", "number", "30");
        assert_form_input_with_value(&form, "category", "text", "Transport");
        assert_form_input_with_value(&form, "date", "date", "2025-01-17");
    }

    #[tokio::test]
    async fn prefilled_amount_is_not_rounded() {
        let mut expenses = sample_expenses();
        expenses[2].amount = 19.999;
        let state = EditExpensePageState {
            ledger: Arc::new(Mutex::new(Ledger::new(expenses))),
            local_timezone: "Etc/UTC".to_owned(),
        };

        let response =
            get_edit_expense_modal(State(state), Query(EditExpenseQuery { id: Some(3) })).await;

        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "amount", "number", "19.999");
    }

    #[tokio::test]
    async fn missing_expense_selects_nothing() {
        let response = get_edit_expense_modal(
            State(sample_state()),
            Query(EditExpenseQuery { id: Some(99) }),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_eq!(selected_option(&html).as_deref(), Some(""));
    }

    #[test]
    fn query_accepts_target_name_and_empty_value() {
        let query: EditExpenseQuery = serde_urlencoded::from_str("target=4").unwrap();
        assert_eq!(query.id, Some(4));

        let query: EditExpenseQuery = serde_urlencoded::from_str("target=").unwrap();
        assert_eq!(query.id, None);

        let query: EditExpenseQuery = serde_urlencoded::from_str("id=2").unwrap();
        assert_eq!(query.id, Some(2));
    }
}
