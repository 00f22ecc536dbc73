//! Alert system for displaying success and error messages to users.
//!
//! Alerts are swapped into the `#alert-container` element of the base page,
//! either as the target of a failed htmx request or out-of-band alongside a
//! successful one.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The action worked.
    Success { message: String, details: String },
    /// The action failed.
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as a standalone fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    /// Render the alert so that htmx swaps it into the alert container while
    /// the main response goes to the request's own target.
    pub fn into_out_of_band_markup(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_markup())
            }
        }
    }

    fn into_markup(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 mb-4 text-sm text-green-800 rounded-lg bg-green-50 \
                dark:bg-gray-800 dark:text-green-400",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html! {
            div class=(style) role="alert"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.into_html()).into_response()
    }
}
