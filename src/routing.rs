//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get},
};

use crate::{
    AppState,
    api::TransactionApi,
    dashboard::{delete_transaction_endpoint, get_dashboard_page},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router<A>(state: AppState<A>) -> Router
where
    A: TransactionApi + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<A>))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint::<A>),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page, test_utils::get_header};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert_eq!(get_header(&response, "location"), endpoints::DASHBOARD_VIEW);
    }
}
