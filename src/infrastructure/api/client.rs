use crate::error::{ApiError, ApiResult, ErrorResponse, GENERIC_ERROR_MESSAGE};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Configured HTTP client for the warehouse API.
///
/// Holds the resolved base address and a single `reqwest::Client`. Both are
/// read-only after construction, and the client is safe for concurrent use
/// by multiple in-flight operations. Every request flows through one
/// dispatch stage that unwraps successful payloads and normalizes failures
/// into [`ApiError`] before the result reaches calling code.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::from_transport)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base address.
    ///
    /// The path must already carry its query string, percent-encoded.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        Self::unwrap_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        Self::unwrap_json(response).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(ApiError::from_transport)?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Success: yield only the deserialized payload, discarding status and
    /// headers. Failure: one normalized error.
    async fn unwrap_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ApiError::from_transport)
    }

    async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Best effort: a service-supplied message field wins, else generic.
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        };

        tracing::warn!(status = %status.as_u16(), message = %message, "Request failed");
        Err(ApiError::new(message))
    }
}
