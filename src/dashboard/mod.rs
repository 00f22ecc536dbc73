//! Dashboard module
//!
//! Provides an overview page showing the account balance and the list of
//! transactions, and the endpoint for deleting a transaction from it.

mod cards;
mod handlers;
mod tables;
mod view_model;

pub use handlers::{DashboardState, delete_transaction_endpoint, get_dashboard_page};
pub use view_model::{
    DashboardSnapshot, DashboardTransaction, FormattedBalance, TransactionViewModel,
};
