//! The searchable, sortable table of expenses.
//!
//! The table is rendered as part of the dashboard and re-rendered on its own
//! whenever the search text, kind filter or sort column changes.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    endpoints,
    expense::{
        core::{Expense, ExpenseKind},
        ledger::lock_ledger,
        query::{KindFilter, SortDirection, SortKey, SortState, TableQuery, filter_and_sort},
        response::LedgerState,
    },
    html::{
        CARD_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_signed_currency, truncate,
    },
};

const CATEGORY_DISPLAY_LIMIT: usize = 32;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Renders the expense table for `query`, used by the search box, kind filter and column headers.
pub async fn get_expense_table(
    State(state): State<LedgerState>,
    Query(query): Query<TableQuery>,
) -> Response {
    let expenses = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => return error.into_alert_response(),
    };

    expense_table_view(&expenses, &query).into_response()
}

/// The search box and kind filter that control the table.
///
/// Both controls request a new table including the current sort, which is
/// stored in `#table-sort-state` inside the table.
pub fn table_controls_view(query: &TableQuery) -> Markup {
    let filters = [
        (KindFilter::All, "All"),
        (KindFilter::Income, "Income"),
        (KindFilter::Expense, "Expense"),
    ];

    html!(
        form
            id="table-controls"
            class="flex flex-col sm:flex-row gap-2 mb-4"
            onsubmit="return false"
        {
            input
                type="search"
                name="q"
                value=(query.q)
                placeholder="Search by category, type or amount"
                aria-label="Search expenses"
                hx-get=(endpoints::EXPENSE_TABLE)
                hx-trigger="input changed delay:300ms, search"
                hx-target="#expense-table"
                hx-swap="outerHTML"
                hx-include="#table-controls, #table-sort-state"
                class=(FORM_TEXT_INPUT_STYLE);

            select
                name="filter"
                aria-label="Filter by type"
                hx-get=(endpoints::EXPENSE_TABLE)
                hx-target="#expense-table"
                hx-swap="outerHTML"
                hx-include="#table-controls, #table-sort-state"
                class={ (FORM_TEXT_INPUT_STYLE) " sm:max-w-48" }
            {
                @for (filter, label) in filters {
                    option
                        value=(filter.as_query_value())
                        selected[filter == query.filter]
                    {
                        (label)
                    }
                }
            }
        }
    )
}

/// The table of expenses matching `query`, with a count of how many are shown.
pub fn expense_table_view(expenses: &[Expense], query: &TableQuery) -> Markup {
    let rows = filter_and_sort(expenses, query);
    let sort = query.sort_state();
    let columns = [
        (SortKey::Id, "ID"),
        (SortKey::Date, "Date"),
        (SortKey::Category, "Category"),
        (SortKey::Kind, "Type"),
        (SortKey::Amount, "Amount"),
    ];

    html!(
        div id="expense-table" class=(CARD_STYLE)
        {
            div id="table-sort-state" hidden
            {
                @if let Some(sort) = sort {
                    input type="hidden" name="sort" value=(sort.key.as_query_value());
                    input type="hidden" name="dir" value=(sort.direction.as_query_value());
                }
            }

            div class="overflow-x-auto"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            @for (key, label) in columns {
                                (sortable_header(query, key, label))
                            }
                        }
                    }

                    tbody
                    {
                        @for expense in &rows {
                            (expense_row(expense))
                        }

                        @if rows.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="5" class="px-6 py-4 text-center"
                                {
                                    "No expenses found"
                                }
                            }
                        }
                    }
                }
            }

            p id="table-count" class="mt-4 text-sm text-gray-600 dark:text-gray-400"
            {
                "Showing " (rows.len()) " of " (expenses.len()) " transactions"
            }
        }
    )
}

fn sortable_header(query: &TableQuery, key: SortKey, label: &str) -> Markup {
    let current = query.sort_state().filter(|sort| sort.key == key);
    let next = SortState::cycle(query.sort_state(), key);
    let url = query.with_sort(next).to_url(endpoints::EXPENSE_TABLE);

    let (aria_sort, indicator) = match current.map(|sort| sort.direction) {
        Some(SortDirection::Asc) => ("ascending", "▲"),
        Some(SortDirection::Desc) => ("descending", "▼"),
        None => ("none", ""),
    };

    html!(
        th scope="col" class="px-6 py-3" aria-sort=(aria_sort)
        {
            button
                type="button"
                hx-get=(url)
                hx-target="#expense-table"
                hx-swap="outerHTML"
                data-sort-key=(key.as_query_value())
                class="inline-flex items-center gap-1 uppercase cursor-pointer
                    hover:text-blue-600 dark:hover:text-blue-400"
            {
                (label)
                @if !indicator.is_empty() {
                    span aria-hidden="true" { (indicator) }
                }
            }
        }
    )
}

fn expense_row(expense: &Expense) -> Markup {
    let is_income = expense.kind == ExpenseKind::Income;
    let (badge_style, amount_style) = if is_income {
        (
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
            "text-green-600 dark:text-green-400",
        )
    } else {
        (
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
            "text-red-600 dark:text-red-400",
        )
    };
    let category = truncate(&expense.category, CATEGORY_DISPLAY_LIMIT)
        .map(|truncated| format!("{truncated}…"))
        .unwrap_or_else(|| expense.category.clone());

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.display_id)
        {
            td class=(TABLE_CELL_STYLE) { (expense.display_id) }
            td class=(TABLE_CELL_STYLE) { (format_date(expense.date)) }
            td class=(TABLE_CELL_STYLE) title=(expense.category) { (category) }
            td class=(TABLE_CELL_STYLE)
            {
                span class={ "px-2.5 py-0.5 text-xs font-semibold rounded-full " (badge_style) }
                {
                    (expense.kind)
                }
            }
            td class={ (TABLE_CELL_STYLE) " font-medium " (amount_style) }
            {
                (format_signed_currency(expense.amount, is_income))
            }
        }
    )
}

/// Format a date like "Jan 15, 2025".
fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("could not format date {date}: {error}");
        date.to_string()
    })
}
