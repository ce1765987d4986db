//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the full dashboard page and its content fragment
//! - HTML view functions for the action bar and the dashboard layout
//! - The query type that carries the table and chart view state

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    dashboard::{
        cards::summary_cards_view,
        charts::{ECHARTS_SCRIPT, build_dashboard_charts, charts_view},
    },
    endpoints,
    expense::{
        Expense, LedgerState, Summary, TableQuery, expense_table_view, lock_ledger,
        table_controls_view,
    },
    html::{BUTTON_ACTION_STYLE, HeadElement, base, dollar_input_styles},
    navigation::NavBar,
};

/// Whether the "Financial Overview" charts are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartsVisibility {
    /// Show the charts.
    #[default]
    Show,
    /// Hide the charts.
    Hide,
}

impl ChartsVisibility {
    fn toggled(self) -> Self {
        match self {
            ChartsVisibility::Show => ChartsVisibility::Hide,
            ChartsVisibility::Hide => ChartsVisibility::Show,
        }
    }

    fn as_query_value(self) -> &'static str {
        match self {
            ChartsVisibility::Show => "show",
            ChartsVisibility::Hide => "hide",
        }
    }
}

/// The view state of the dashboard: the table options plus whether charts are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Search, filter and sort for the expense table.
    #[serde(flatten)]
    pub table: TableQuery,
    /// Whether to show the charts.
    #[serde(default)]
    pub charts: ChartsVisibility,
}

/// Display the dashboard page.
pub async fn get_dashboard_page(
    State(state): State<LedgerState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let expenses = lock_ledger(&state.ledger)?.snapshot();

    Ok(dashboard_view(&expenses, &query).into_response())
}

/// Render the dashboard content for htmx.
///
/// Requested after the expense list changes and when the charts are toggled.
pub async fn get_dashboard_content(
    State(state): State<LedgerState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let expenses = match lock_ledger(&state.ledger) {
        Ok(ledger) => ledger.snapshot(),
        Err(error) => return error.into_alert_response(),
    };

    dashboard_content_partial(&expenses, &query).into_response()
}

fn dashboard_view(expenses: &[Expense], query: &DashboardQuery) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main
            class="flex flex-col items-center px-2 py-4 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="self-start text-2xl font-bold mb-6" { "Expense Tracker Dashboard" }

            div
                id="dashboard-content"
                class="w-full"
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-trigger="expenses-changed from:body"
                hx-include="#table-controls, #table-sort-state, #view-state"
                hx-target="this"
                hx-swap="innerHTML"
            {
                (dashboard_content_partial(expenses, query))
            }
        }
    );

    // The modal forms are swapped into this page, so their styles live here.
    let head_elements = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned()),
        dollar_input_styles(),
    ];

    base("Dashboard", &head_elements, &content)
}

/// The cards, action bar, charts and table.
///
/// Everything in here is rendered from one snapshot so the numbers always agree.
fn dashboard_content_partial(expenses: &[Expense], query: &DashboardQuery) -> Markup {
    let summary = Summary::from_expenses(expenses);
    let charts = match query.charts {
        ChartsVisibility::Show => Some(build_dashboard_charts(expenses)),
        ChartsVisibility::Hide => None,
    };

    html!(
        input
            type="hidden"
            id="view-state"
            name="charts"
            value=(query.charts.as_query_value());

        (summary_cards_view(&summary))

        (action_bar_view(query.charts))

        @if let Some(charts) = &charts {
            (charts_view(charts.as_ref().map(|charts| charts.as_slice())))
        }

        section id="transactions" class="w-full"
        {
            h2 class="text-xl font-bold mb-4" { "Transactions" }

            (table_controls_view(&query.table))

            (expense_table_view(expenses, &query.table))
        }
    )
}

fn action_bar_view(charts: ChartsVisibility) -> Markup {
    let toggle_url = format!(
        "{}?charts={}",
        endpoints::DASHBOARD_CONTENT,
        charts.toggled().as_query_value()
    );
    let toggle_label = match charts {
        ChartsVisibility::Show => "Hide Charts",
        ChartsVisibility::Hide => "Show Charts",
    };
    let modal_buttons = [
        (endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
        (endpoints::EDIT_EXPENSE_VIEW, "Update Expense"),
        (endpoints::DELETE_EXPENSE_VIEW, "Delete Expense"),
    ];

    html!(
        div id="action-bar" class="w-full flex flex-wrap gap-2 mb-6"
        {
            @for (endpoint, label) in modal_buttons {
                button
                    type="button"
                    hx-get=(endpoint)
                    hx-target="#modal-container"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    class=(BUTTON_ACTION_STYLE)
                {
                    (label)
                }
            }

            button
                type="button"
                hx-post=(endpoints::EXPORT)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                class=(BUTTON_ACTION_STYLE)
            {
                "Export PDF"
            }

            button
                type="button"
                id="toggle-charts"
                hx-get=(toggle_url)
                hx-include="#table-controls, #table-sort-state"
                hx-target="#dashboard-content"
                hx-swap="innerHTML"
                class=(BUTTON_ACTION_STYLE)
            {
                (toggle_label)
            }
        }
    )
}
