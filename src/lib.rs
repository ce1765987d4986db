//! Expense Tracker is a web app for keeping track of income and spending.
//!
//! This library provides a REST API that directly serves HTML pages: a
//! dashboard with summary cards, charts and a searchable, sortable table of
//! transactions, plus modal forms for adding, updating and deleting them.
//!
//! All data lives in memory for as long as the server runs.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod actions;
mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod expense;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use expense::{Expense, ExpenseKind, Ledger};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount or category of an expense was left blank.
    #[error("the amount and category are required")]
    MissingFields,

    /// The amount could not be parsed as a finite number.
    ///
    /// Callers should pass in the text the user entered.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The expense kind was neither income nor expense.
    #[error("\"{0}\" is not a valid kind, expected \"Income\" or \"Expense\"")]
    InvalidKind(String),

    /// The date was blank or not a calendar date in the `YYYY-MM-DD` format.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// An update was submitted without choosing which expense to change.
    #[error("no expense was selected")]
    NoExpenseSelected,

    /// Tried to update an expense that does not exist
    #[error("tried to update an expense that is not in the ledger")]
    UpdateMissingExpense,

    /// A delete was submitted without any IDs.
    #[error("no expense IDs were entered")]
    NoIdsEntered,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the ledger lock
    #[error("could not acquire the ledger lock")]
    LedgerLockError,
}

impl Error {
    /// Whether the error was caused by the user's input rather than the server.
    fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::MissingFields
                | Error::InvalidAmount(_)
                | Error::InvalidKind(_)
                | Error::InvalidDate(_)
                | Error::NoExpenseSelected
                | Error::UpdateMissingExpense
                | Error::NoIdsEntered
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::LedgerLockError => InternalServerError::default().into_response(),
            // Validation errors only happen on the htmx endpoints, so answer with an alert.
            error if error.is_validation_error() => error.into_alert_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for the `#alert-container` of the page.
    fn into_alert_response(self) -> Response {
        if self.is_validation_error() {
            tracing::warn!("Rejected request: {self}");
        } else {
            tracing::error!("Could not complete request: {self}");
        }

        let (status, message, details) = match self {
            Error::MissingFields => (
                StatusCode::BAD_REQUEST,
                "Missing required fields",
                "Please fill in the amount and category.".to_owned(),
            ),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                "Invalid amount",
                format!("\"{amount}\" is not a number. Enter an amount such as 12.50."),
            ),
            Error::InvalidKind(kind) => (
                StatusCode::BAD_REQUEST,
                "Invalid type",
                format!("\"{kind}\" is not a valid type. Choose either Income or Expense."),
            ),
            Error::InvalidDate(date) if date.is_empty() => (
                StatusCode::BAD_REQUEST,
                "Invalid date",
                "Please choose a date.".to_owned(),
            ),
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                "Invalid date",
                format!("\"{date}\" is not a valid date. Enter a date such as 2025-01-15."),
            ),
            Error::NoExpenseSelected => (
                StatusCode::BAD_REQUEST,
                "No expense selected",
                "Please select an expense to update.".to_owned(),
            ),
            Error::UpdateMissingExpense => (
                StatusCode::NOT_FOUND,
                "Could not update expense",
                "The expense could not be found. \
                Try refreshing the page to see if the expense has been deleted."
                    .to_owned(),
            ),
            Error::NoIdsEntered => (
                StatusCode::BAD_REQUEST,
                "No IDs entered",
                "Enter the IDs of the expenses to delete, separated by commas.".to_owned(),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                "Not found",
                "The requested resource could not be found.".to_owned(),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid Timezone Settings",
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            ),
            Error::LedgerLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        (
            status,
            Alert::Error {
                message: message.to_owned(),
                details,
            },
        )
            .into_response()
    }
}
