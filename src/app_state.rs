//! Implements a struct that holds the state of the dashboard server.

use std::sync::Arc;

use crate::{api::TransactionApi, dashboard::TransactionViewModel, format::DisplayFormat};

/// The state of the dashboard server.
pub struct AppState<A> {
    /// The dashboard state, shared by every request.
    pub view_model: Arc<TransactionViewModel<A>>,
}

impl<A: TransactionApi> AppState<A> {
    /// Create a new [AppState] that fetches data through `api` and formats it with `display_format`.
    ///
    /// Nothing is fetched until the dashboard is first requested.
    pub fn new(api: A, display_format: DisplayFormat) -> Self {
        Self {
            view_model: Arc::new(TransactionViewModel::new(api, display_format)),
        }
    }
}

impl<A> Clone for AppState<A> {
    fn clone(&self) -> Self {
        Self {
            view_model: self.view_model.clone(),
        }
    }
}
