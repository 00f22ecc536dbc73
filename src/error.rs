//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    api::{ApiError, TransactionId},
    internal_server_error::InternalServerError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transactions and balance could not be fetched from the finance API.
    ///
    /// The dashboard keeps showing whatever it last loaded successfully.
    #[error("could not load transactions: {0}")]
    LoadFailure(ApiError),

    /// The finance API did not confirm the deletion of a transaction.
    ///
    /// The transaction stays on the dashboard.
    #[error("could not delete transaction {id}: {source}")]
    DeleteFailure {
        /// The transaction that was meant to be deleted.
        id: TransactionId,
        /// Why the finance API refused or failed.
        source: ApiError,
    },

    /// The URL configured for the finance API cannot be used.
    #[error("invalid finance API URL {0}")]
    InvalidApiUrl(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::LoadFailure(error) => {
                tracing::error!("Could not load the dashboard: {error}");
                InternalServerError {
                    description: "Could not load your transactions",
                    fix: "The finance API did not respond as expected. \
                    Try again later or check the server logs.",
                }
                .into_response()
            }
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::DeleteFailure { source, .. } if source.is_not_found() => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::DeleteFailure { .. } => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The finance API did not confirm the deletion. \
                    Try again later or check the server logs."
                        .to_owned(),
                },
            ),
            Error::LoadFailure(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not load transactions".to_owned(),
                    details: "The finance API did not respond as expected. \
                    Try again later or check the server logs."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
