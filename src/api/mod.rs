//! HTTP client layer for the task management API.
//!
//! `ApiClient` is the single gateway for outbound requests: it attaches the
//! bearer token from the injected [`TokenStore`], serializes JSON bodies,
//! and normalizes error responses into [`ApiError`] values carrying the
//! server's `detail` text. Requests are never retried; every failure
//! surfaces to the issuing command.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::token::TokenStore;
use anyhow::Result;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub mod auth;
pub mod tasks;

pub use auth::Auth;
pub use tasks::TaskApi;

/// A non-success response from the task server.
///
/// `detail` is the server's own message when the error body carries a
/// string `detail` field, or a generic placeholder otherwise. Commands
/// match on `status` to give targeted text for known cases (401, 409, 404).
#[derive(Debug, thiserror::Error)]
#[error("{detail}")]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

/// Extracts user-facing text from a request error: the server's detail for
/// API rejections, a generic connection failure for everything else
/// (network errors, malformed responses).
pub fn error_detail(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ApiError>() {
        Some(api) => api.detail.clone(),
        None => Message::ApiConnectionFailed.to_string(),
    }
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenStore,
}

impl ApiClient {
    /// Builds a client from the saved configuration and the default token
    /// store location.
    pub fn new() -> Result<Self> {
        let config = Config::read()?;
        Ok(Self::with_parts(&config.api_url(), TokenStore::new()?))
    }

    /// Builds a client against an explicit base URL and token store.
    pub fn with_parts(base_url: &str, token: TokenStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.token
    }

    pub fn token_store_mut(&mut self) -> &mut TokenStore {
        &mut self.token
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        Self::handle(self.request(Method::GET, endpoint).send().await?).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        Self::handle(self.request(Method::GET, endpoint).query(query).send().await?).await
    }

    /// POST with an optional JSON body (the logout endpoint takes none).
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: Option<&B>) -> Result<T> {
        let mut req = self.request(Method::POST, endpoint);
        if let Some(body) = body {
            req = req.json(body);
        }
        Self::handle(req.send().await?).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T> {
        Self::handle(self.request(Method::PATCH, endpoint).json(body).send().await?).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        Self::handle(self.request(Method::DELETE, endpoint).send().await?).await
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        let mut req = self.client.request(method, url);
        if let Some(token) = self.token.get() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn handle<T: DeserializeOwned>(res: Response) -> Result<T> {
        let status = res.status();

        if !status.is_success() {
            // The server reports errors as {"detail": "..."}. A detail that
            // is missing or not a string is a structured validation body.
            let detail = match res.json::<Value>().await {
                Ok(body) => match body.get("detail") {
                    Some(Value::String(detail)) => detail.clone(),
                    _ => Message::ApiValidationError.to_string(),
                },
                Err(_) => Message::ApiErrorGeneric.to_string(),
            };
            return Err(ApiError { status, detail }.into());
        }

        // 204 No Content carries no JSON to parse.
        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(Value::Null)?);
        }

        Ok(res.json::<T>().await?)
    }
}
