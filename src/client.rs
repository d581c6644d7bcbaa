use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::core::errors::{extract_error_message, ApiError};
use crate::core::token_store::TokenStore;

/// Translates a typed call into exactly one HTTP round trip: bearer header
/// when a token is persisted, uniform timeout, normalized errors. Retry
/// policy, if any, belongs to callers; none is applied here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens: TokenStore::new(config.token_file.clone()),
        })
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One round trip. The token slot is re-read on every request so a
    /// login or logout elsewhere in the process takes effect immediately.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(method.clone(), self.url(path));
        if let Some(token) = self.tokens.load() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!(method = %method, path, status = response.status().as_u16(), "api call");
        Ok(response)
    }

    /// Status check shared by every call: 2xx passes through, anything else
    /// becomes an `ApiError::Http` with a best-effort message.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw = response.text().await.unwrap_or_default();
        let message = extract_error_message(&raw).unwrap_or_else(|| "Something went wrong".to_string());
        Err(ApiError::Http { status: status.as_u16(), message })
    }

    fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        // An empty 2xx body resolves to the empty-object sentinel so
        // envelope types deserialize to their defaults.
        let effective = if text.trim().is_empty() { "{}" } else { text };
        serde_json::from_str(effective).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn json_result<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = self.check(response).await?;
        let text = response.text().await?;
        Self::parse_body(&text)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute::<()>(Method::GET, path, None).await?;
        self.json_result(response).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        self.json_result(response).await
    }

    /// POST whose success body is raw text rather than JSON. Only the login
    /// endpoint behaves this way.
    pub(crate) async fn post_text<B>(&self, path: &str, body: &B) -> Result<String, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        let response = self.check(response).await?;
        Ok(response.text().await?)
    }

    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute::<()>(Method::PUT, path, None).await?;
        self.json_result(response).await
    }

    pub(crate) async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        self.json_result(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute::<()>(Method::DELETE, path, None).await?;
        self.json_result(response).await
    }
}
