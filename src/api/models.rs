//! The JSON bodies exchanged with the finance API.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The opaque identifier the finance API assigns to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an identifier issued by the finance API.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as it appears in API paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received, e.g., a salary.
    Income,
    /// Money spent.
    Outcome,
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    /// The category's display name.
    pub title: String,
}

/// A transaction as returned by `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// The transaction's unique ID.
    pub id: TransactionId,
    /// A short label for the transaction.
    pub title: String,
    /// The amount of money, always non-negative. The sign comes from `kind`.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the finance API recorded the transaction.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The account totals computed by the finance API.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Balance {
    /// The sum of all income.
    pub income: f64,
    /// The sum of all outcome.
    pub outcome: f64,
    /// Income minus outcome.
    pub total: f64,
}

/// The body of a successful `GET /transactions` response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionsResponse {
    /// The transactions in the order the API chose.
    pub transactions: Vec<Transaction>,
    /// The totals over every transaction.
    pub balance: Balance,
}
