//! The state behind the dashboard and the operations that change it.
//!
//! [TransactionViewModel] fetches transactions and the balance from the
//! finance API, formats them for display and publishes both as a single
//! [DashboardSnapshot]. Renderers read the latest snapshot or subscribe to
//! changes. Publishing replaces the whole snapshot at once, so a reader never
//! sees a list from one response next to a balance from another.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use time::OffsetDateTime;
use tokio::sync::watch;

use crate::{
    Error,
    api::{
        Balance, Category, Transaction, TransactionApi, TransactionId, TransactionType,
        TransactionsResponse,
    },
    format::DisplayFormat,
};

/// A transaction together with its display strings.
///
/// The formatted fields are derived once, when the transaction is loaded, and
/// the original fields are kept as they came from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardTransaction {
    /// The transaction's unique ID.
    pub id: TransactionId,
    /// A short label for the transaction.
    pub title: String,
    /// The amount as returned by the API.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    pub kind: TransactionType,
    /// The category the transaction belongs to.
    pub category: Category,
    /// When the finance API recorded the transaction.
    pub created_at: OffsetDateTime,
    /// `value` formatted as currency.
    pub formatted_value: String,
    /// The date of `created_at` in the viewer's locale and timezone.
    pub formatted_date: String,
}

impl DashboardTransaction {
    fn new(transaction: Transaction, format: &DisplayFormat) -> Self {
        Self {
            formatted_value: format.format_currency(transaction.value),
            formatted_date: format.format_date(transaction.created_at),
            id: transaction.id,
            title: transaction.title,
            value: transaction.value,
            kind: transaction.kind,
            category: transaction.category,
            created_at: transaction.created_at,
        }
    }
}

/// The account totals as currency strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedBalance {
    /// Total income.
    pub income: String,
    /// Total outcome.
    pub outcome: String,
    /// Income minus outcome.
    pub total: String,
}

impl FormattedBalance {
    fn new(balance: Balance, format: &DisplayFormat) -> Self {
        Self {
            income: format.format_currency(balance.income),
            outcome: format.format_currency(balance.outcome),
            total: format.format_currency(balance.total),
        }
    }
}

/// Everything the dashboard displays, published as one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    /// The transactions in the order the API returned them.
    pub transactions: Vec<DashboardTransaction>,
    /// The balance from the same response as `transactions`.
    pub balance: FormattedBalance,
    /// Set when a transaction was deleted since the balance was fetched.
    ///
    /// The balance is never recomputed locally, it only changes on the next
    /// successful load.
    pub balance_is_stale: bool,
    generation: u64,
}

impl DashboardSnapshot {
    fn new(response: TransactionsResponse, format: &DisplayFormat, generation: u64) -> Self {
        Self {
            transactions: response
                .transactions
                .into_iter()
                .map(|transaction| DashboardTransaction::new(transaction, format))
                .collect(),
            balance: FormattedBalance::new(response.balance, format),
            balance_is_stale: false,
            generation,
        }
    }
}

/// Owns the dashboard state for the lifetime of the view.
///
/// Each operation takes a ticket from a monotonically increasing counter when
/// it is ready to publish. A snapshot is only replaced by a load that was
/// started after the snapshot was produced, so a slow response can never
/// overwrite newer data.
pub struct TransactionViewModel<A> {
    api: A,
    format: DisplayFormat,
    state: watch::Sender<DashboardSnapshot>,
    last_ticket: AtomicU64,
    closed: AtomicBool,
}

impl<A: TransactionApi> TransactionViewModel<A> {
    /// Create a view model with an empty snapshot. Nothing is fetched until
    /// [TransactionViewModel::load] is called.
    pub fn new(api: A, format: DisplayFormat) -> Self {
        let (state, _) = watch::channel(DashboardSnapshot::default());

        Self {
            api,
            format,
            state,
            last_ticket: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.state.borrow().clone()
    }

    /// Watch for newly published state.
    pub fn subscribe(&self) -> watch::Receiver<DashboardSnapshot> {
        self.state.subscribe()
    }

    /// Stop publishing. Operations still in flight finish their requests but
    /// leave the state untouched.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Whether [TransactionViewModel::close] has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn next_ticket(&self) -> u64 {
        self.last_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetch the transactions and balance and publish them together.
    ///
    /// # Errors
    /// Returns [Error::LoadFailure] if the request fails. The published state
    /// keeps its previous value.
    pub async fn load(&self) -> Result<(), Error> {
        let ticket = self.next_ticket();

        let response = self.api.get_transactions().await.map_err(|error| {
            tracing::error!("Could not fetch transactions: {error}");
            Error::LoadFailure(error)
        })?;

        if self.is_closed() {
            tracing::debug!("Discarding transactions loaded after the dashboard was closed");
            return Ok(());
        }

        let snapshot = DashboardSnapshot::new(response, &self.format, ticket);
        let transaction_count = snapshot.transactions.len();

        let published = self.state.send_if_modified(|current| {
            if current.generation >= ticket {
                return false;
            }

            *current = snapshot;
            true
        });

        if published {
            tracing::debug!("Published {transaction_count} transactions");
        } else {
            tracing::debug!("Discarding out of date response for load #{ticket}");
        }

        Ok(())
    }

    /// Reload everything from the finance API.
    ///
    /// Intended to be called once after a change has been confirmed by the
    /// API, e.g. after [TransactionViewModel::remove].
    pub async fn refresh(&self) -> Result<(), Error> {
        tracing::debug!("Refreshing dashboard");
        self.load().await
    }

    /// Delete the transaction `id` through the API and then drop it from the
    /// published list.
    ///
    /// The balance is not touched. If a transaction was removed, the snapshot
    /// is flagged with [DashboardSnapshot::balance_is_stale]. Deleting an ID
    /// that is not in the list still sends the request but leaves the state
    /// as it is.
    ///
    /// # Errors
    /// Returns [Error::DeleteFailure] if the API does not confirm the
    /// deletion. The published list is left unchanged.
    pub async fn remove(&self, id: &TransactionId) -> Result<(), Error> {
        self.api.delete_transaction(id).await.map_err(|error| {
            tracing::error!("Could not delete transaction {id}: {error}");
            Error::DeleteFailure {
                id: id.clone(),
                source: error,
            }
        })?;

        if self.is_closed() {
            return Ok(());
        }

        let ticket = self.next_ticket();
        let removed = self.state.send_if_modified(|current| {
            let count_before = current.transactions.len();
            current.transactions.retain(|transaction| &transaction.id != id);

            if current.transactions.len() == count_before {
                return false;
            }

            current.balance_is_stale = true;
            current.generation = ticket;
            true
        });

        if removed {
            tracing::info!("Deleted transaction {id}");
        } else {
            tracing::debug!("Deleted transaction {id} which was not on the dashboard");
        }

        Ok(())
    }
}
