//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and deleting transactions
//! - HTML view functions for rendering the dashboard UI
//! - The state used by the handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState,
    alert::Alert,
    api::{TransactionApi, TransactionId},
    dashboard::{
        cards::balance_cards_view,
        tables::transactions_table_view,
        view_model::{DashboardSnapshot, TransactionViewModel},
    },
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, PAGE_CONTAINER_STYLE, base, loading_spinner},
};

/// The state needed for displaying the dashboard page.
pub struct DashboardState<A> {
    /// The view model shared by every request.
    pub view_model: Arc<TransactionViewModel<A>>,
}

impl<A> Clone for DashboardState<A> {
    fn clone(&self) -> Self {
        Self {
            view_model: self.view_model.clone(),
        }
    }
}

impl<A> FromRef<AppState<A>> for DashboardState<A> {
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            view_model: state.view_model.clone(),
        }
    }
}

/// Display the balance and transactions, fetching them from the finance API first.
///
/// Requests made by htmx, e.g. the refresh button, only get the dashboard content.
pub async fn get_dashboard_page<A>(
    State(state): State<DashboardState<A>>,
    HxRequest(is_htmx_request): HxRequest,
) -> Response
where
    A: TransactionApi + 'static,
{
    let result = state.view_model.load().await;

    match (result, is_htmx_request) {
        (Ok(()), true) => {
            Html(dashboard_content_view(&state.view_model.snapshot()).into_string()).into_response()
        }
        (Ok(()), false) => dashboard_view(&state.view_model.snapshot()).into_response(),
        (Err(error), true) => error.into_alert_response(),
        (Err(error), false) => error.into_response(),
    }
}

/// Delete a transaction through the finance API and return the updated dashboard content.
///
/// After the deletion is confirmed the dashboard is refreshed once so that the
/// balance includes the change. If that refresh fails the list is still
/// updated and the balance is marked as out of date.
pub async fn delete_transaction_endpoint<A>(
    State(state): State<DashboardState<A>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    A: TransactionApi + 'static,
{
    if let Err(error) = state.view_model.remove(&transaction_id).await {
        return error.into_alert_response();
    }

    let alert = match state.view_model.refresh().await {
        Ok(()) => Alert::Success {
            message: "Transaction deleted".to_owned(),
            details: String::new(),
        },
        Err(error) => {
            tracing::warn!("Deleted transaction {transaction_id} but could not refresh: {error}");
            Alert::Success {
                message: "Transaction deleted".to_owned(),
                details: "The totals could not be updated. Refresh the page to try again."
                    .to_owned(),
            }
        }
    };

    let snapshot = state.view_model.snapshot();

    Html(
        html! {
            (dashboard_content_view(&snapshot))
            (alert.into_out_of_band_markup())
        }
        .into_string(),
    )
    .into_response()
}

/// The balance cards and transaction table, swapped into `#dashboard-content`.
fn dashboard_content_view(snapshot: &DashboardSnapshot) -> Markup {
    html! {
        (balance_cards_view(&snapshot.balance, snapshot.balance_is_stale))
        (transactions_table_view(&snapshot.transactions))
    }
}

fn dashboard_view(snapshot: &DashboardSnapshot) -> Markup {
    let content = html!(
        div class={ (PAGE_CONTAINER_STYLE) " max-w-screen-xl" }
        {
            header class="w-full flex justify-between items-center mb-8"
            {
                h1 class="text-2xl font-bold" { "Finances" }

                button
                    id="indicator"
                    type="button"
                    class=(BUTTON_SECONDARY_STYLE)
                    hx-get=(endpoints::DASHBOARD_VIEW)
                    hx-target="#dashboard-content"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    hx-indicator="#indicator"
                {
                    (loading_spinner())
                    "Refresh"
                }
            }

            div id="dashboard-content" class="w-full"
            {
                (dashboard_content_view(snapshot))
            }
        }
    );

    base("Dashboard", &content)
}
