//! A scripted stand-in for the finance API.

use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use time::macros::datetime;

use crate::api::{
    ApiError, Balance, Category, Transaction, TransactionApi, TransactionId, TransactionType,
    TransactionsResponse,
};

/// Answers `GET` requests from a queue of responses and records deletions.
///
/// Deletions succeed unless a failure has been queued. Clones share the same
/// queues and counters.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTransactionApi {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    get_responses: Mutex<VecDeque<Result<TransactionsResponse, ApiError>>>,
    delete_results: Mutex<VecDeque<Result<(), ApiError>>>,
    deleted_ids: Mutex<Vec<TransactionId>>,
    get_calls: AtomicUsize,
}

impl FakeTransactionApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_get_response(&self, response: Result<TransactionsResponse, ApiError>) {
        self.inner.get_responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn push_delete_result(&self, result: Result<(), ApiError>) {
        self.inner.delete_results.lock().unwrap().push_back(result);
    }

    pub(crate) fn get_calls(&self) -> usize {
        self.inner.get_calls.load(Ordering::SeqCst)
    }

    /// Every ID a deletion was requested for, including failed ones.
    pub(crate) fn deleted_ids(&self) -> Vec<TransactionId> {
        self.inner.deleted_ids.lock().unwrap().clone()
    }
}

impl TransactionApi for FakeTransactionApi {
    async fn get_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        self.inner.get_calls.fetch_add(1, Ordering::SeqCst);

        self.inner
            .get_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Request("no response queued".to_owned())))
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        self.inner.deleted_ids.lock().unwrap().push(id.clone());

        self.inner
            .delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

/// A transaction created on 2024-01-05 at midnight UTC.
pub(crate) fn transaction(id: &str, title: &str, value: f64, kind: TransactionType) -> Transaction {
    let category = match kind {
        TransactionType::Income => "Job",
        TransactionType::Outcome => "Food",
    };

    Transaction {
        id: TransactionId::new(id),
        title: title.to_owned(),
        value,
        kind,
        category: Category {
            title: category.to_owned(),
        },
        created_at: datetime!(2024-01-05 0:00 UTC),
    }
}

/// Three transactions, the first being income with ID "1".
pub(crate) fn sample_response() -> TransactionsResponse {
    TransactionsResponse {
        transactions: vec![
            transaction("1", "Salary", 5000.0, TransactionType::Income),
            transaction("2", "Groceries", 120.5, TransactionType::Outcome),
            transaction("3", "Restaurant", 39.9, TransactionType::Outcome),
        ],
        balance: Balance {
            income: 5000.0,
            outcome: 160.4,
            total: 4839.6,
        },
    }
}
