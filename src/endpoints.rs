//! The API endpoints URIs.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the cards, charts and expense table.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The dashboard content without the page shell, for re-rendering after a change.
pub const DASHBOARD_CONTENT: &str = "/dashboard/content";
/// The expense table fragment, for searching, filtering and sorting.
pub const EXPENSE_TABLE: &str = "/expenses/table";
/// The modal form for adding an expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The modal form for updating an expense, takes an optional `id` query parameter.
pub const EDIT_EXPENSE_VIEW: &str = "/expenses/edit";
/// The modal form for deleting expenses.
pub const DELETE_EXPENSE_VIEW: &str = "/expenses/delete";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to list (GET), create (POST) and update (PUT) expenses.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete expenses by ID.
pub const DELETE_EXPENSES_API: &str = "/api/expenses/delete";
/// The route to request a PDF report of the expenses.
pub const EXPORT: &str = "/api/export";
/// The route for the client to log out.
pub const LOG_OUT: &str = "/api/log_out";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_CONTENT);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_TABLE);
        assert_endpoint_is_valid_uri(endpoints::NEW_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::EXPORT);
        assert_endpoint_is_valid_uri(endpoints::LOG_OUT);
    }
}
