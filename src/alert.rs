//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` at the bottom of the page
//! and can be dismissed by the user.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// A message to show the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The action worked.
    Success {
        /// The headline.
        message: String,
        /// Extra information shown under the headline.
        details: String,
    },
    /// The action worked and there is nothing more to say.
    SuccessSimple {
        /// The headline.
        message: String,
    },
    /// The action failed.
    Error {
        /// The headline.
        message: String,
        /// What went wrong and how to fix it.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::Success { message, details } => (false, message, details),
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
        };

        let style = if is_error {
            "text-red-800 border-red-300 bg-red-50 dark:text-red-400 \
            dark:bg-gray-800 dark:border-red-800"
        } else {
            "text-green-800 border-green-300 bg-green-50 dark:text-green-400 \
            dark:bg-gray-800 dark:border-green-800"
        };

        html!(
            div
                class={ "flex items-start p-4 mb-4 text-sm border rounded-lg " (style) }
                role="alert"
                data-alert-kind=(if is_error { "error" } else { "success" })
            {
                div class="flex-1"
                {
                    span class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="ms-3 -my-1.5 rounded-lg p-1.5 inline-flex items-center
                        justify-center h-8 w-8 hover:bg-gray-200 dark:hover:bg-gray-700"
                    aria-label="Close"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "✕"
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        Html(self.into_html().into_string()).into_response()
    }
}
