//! Access to the finance API that owns the transactions.
//!
//! The dashboard never stores transactions itself. Everything it shows comes
//! from `GET /transactions` and the only write it performs is
//! `DELETE /transactions/{id}`.

mod client;
mod models;

use std::future::Future;

pub use client::HttpTransactionApi;
pub use models::{
    Balance, Category, Transaction, TransactionId, TransactionType, TransactionsResponse,
};

/// The errors returned by the finance API or the network in between.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status code.
    #[error("the finance API responded with status {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, kept for the logs.
        body: String,
    },

    /// The response body was not the JSON we expected.
    #[error("could not parse the finance API response: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Whether the API reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// The operations the dashboard needs from the finance API.
pub trait TransactionApi: Send + Sync {
    /// Fetch every transaction along with the account balance.
    fn get_transactions(
        &self,
    ) -> impl Future<Output = Result<TransactionsResponse, ApiError>> + Send;

    /// Delete the transaction with `id`.
    fn delete_transaction(
        &self,
        id: &TransactionId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
