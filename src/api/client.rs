//! A [TransactionApi] that talks to the finance API over HTTP.

use reqwest::{Client as HttpClient, Response, Url};

use crate::{
    Error,
    api::{ApiError, TransactionApi, TransactionId, TransactionsResponse},
};

/// Talks to the finance API with `reqwest`.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpTransactionApi {
    /// Create a client for the API served at `base_url`, e.g. `http://localhost:3333`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP(S) URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|error| Error::InvalidApiUrl(format!("{base_url}: {error}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidApiUrl(format!(
                "{base_url}: expected an http or https URL"
            )));
        }

        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
        })
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // `new` rejects cannot-be-a-base URLs, so the path is always editable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        if status >= 500 {
            tracing::warn!("finance API server error {status}: {body}");
        }

        ApiError::Status { status, body }
    }
}

impl TransactionApi for HttpTransactionApi {
    async fn get_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        let url = self.endpoint_url(&["transactions"]);
        tracing::debug!("GET {url}");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<TransactionsResponse>()
            .await
            .map_err(|error| ApiError::Deserialization(error.to_string()))
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let url = self.endpoint_url(&["transactions", id.as_str()]);
        tracing::debug!("DELETE {url}");

        let response = self
            .http_client
            .delete(url)
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }
}
