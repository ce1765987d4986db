//! The "Export PDF" and "Log out" buttons.
//!
//! Neither has a real effect yet, both only acknowledge the click with an alert.

use axum::response::{IntoResponse, Response};

use crate::alert::Alert;

/// Acknowledge a request to export the expenses as a PDF report.
pub async fn export_endpoint() -> Response {
    tracing::info!("PDF export requested");

    Alert::Success {
        message: "Exporting PDF".to_owned(),
        details: "Your expense report is being generated...".to_owned(),
    }
    .into_response()
}

/// Acknowledge a request to log out.
pub async fn log_out_endpoint() -> Response {
    tracing::info!("log out requested");

    Alert::Success {
        message: "Logged out successfully".to_owned(),
        details: "See you soon!".to_owned(),
    }
    .into_response()
}
