//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    actions::{export_endpoint, log_out_endpoint},
    dashboard::{get_dashboard_content, get_dashboard_page},
    endpoints,
    expense::{
        create_expense_endpoint, delete_expenses_endpoint, edit_expense_endpoint,
        get_create_expense_modal, get_delete_expense_modal, get_edit_expense_modal,
        get_expense_table, list_expenses_endpoint,
    },
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CONTENT, get(get_dashboard_content))
        .route(endpoints::EXPENSE_TABLE, get(get_expense_table))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_modal))
        .route(endpoints::EDIT_EXPENSE_VIEW, get(get_edit_expense_modal))
        .route(endpoints::DELETE_EXPENSE_VIEW, get(get_delete_expense_modal));

    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint)
                .post(create_expense_endpoint)
                .put(edit_expense_endpoint),
        )
        .route(
            endpoints::DELETE_EXPENSES_API,
            post(delete_expenses_endpoint),
        )
        .route(endpoints::EXPORT, post(export_endpoint))
        .route(endpoints::LOG_OUT, get(log_out_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}
