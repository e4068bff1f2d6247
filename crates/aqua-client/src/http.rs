//! HTTP client wrapper over `reqwest`.
//!
//! Responsibilities, in order: attach the bearer token when one is stored,
//! bound every request with the configured timeout, apply the forced-logout
//! rule on 401 responses to mutating requests, and map every non-2xx
//! response to a typed [`Error::Api`] carrying status and server message.
//! No retries anywhere.

use std::sync::Arc;
use std::time::Instant;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use aqua_core::defaults;
use aqua_core::{Error, Result};

use crate::auth::{Navigator, TokenStore};
use crate::config::ClientConfig;

/// Shared HTTP client for all resource services.
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client from configuration plus the auth and navigation seams.
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        info!(
            subsystem = "client",
            component = "http",
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Initializing API client"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
            navigator,
        })
    }

    /// The token store this client consults.
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.tokens)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.client.get(self.url(path)).query(query);
        let response = self.dispatch(Method::GET, path, builder).await?;
        Self::parse_json(response).await
    }

    /// POST a JSON body, expecting a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.client.post(self.url(path)).json(body);
        let response = self.dispatch(Method::POST, path, builder).await?;
        Self::parse_json(response).await
    }

    /// POST a JSON body, discarding the response body.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let builder = self.client.post(self.url(path)).json(body);
        self.dispatch(Method::POST, path, builder).await?;
        Ok(())
    }

    /// PUT a JSON body, expecting a JSON response.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.client.put(self.url(path)).json(body);
        let response = self.dispatch(Method::PUT, path, builder).await?;
        Self::parse_json(response).await
    }

    /// POST a multipart form, expecting a JSON response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let builder = self.client.post(self.url(path)).multipart(form);
        let response = self.dispatch(Method::POST, path, builder).await?;
        Self::parse_json(response).await
    }

    /// PUT a multipart form, expecting a JSON response.
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let builder = self.client.put(self.url(path)).multipart(form);
        let response = self.dispatch(Method::PUT, path, builder).await?;
        Self::parse_json(response).await
    }

    /// DELETE a resource. A 204 is expected; any body is ignored.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.client.delete(self.url(path));
        self.dispatch(Method::DELETE, path, builder).await?;
        Ok(())
    }

    /// Send one request: bearer header, status check, 401 handling.
    ///
    /// A 401 to a non-GET clears the stored token and navigates to the login
    /// route, unless the current route is already an unauthenticated page.
    /// A 401 to a GET passes through untouched so callers can degrade to
    /// public content.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<Response> {
        let builder = match self.tokens.get() {
            Some(pair) => builder.bearer_auth(pair.access),
            None => builder,
        };

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        let status = response.status();
        let elapsed = start.elapsed().as_millis() as u64;

        debug!(
            subsystem = "client",
            component = "http",
            method = %method,
            path,
            status = status.as_u16(),
            duration_ms = elapsed,
            "Request complete"
        );
        if elapsed > defaults::SLOW_REQUEST_MS {
            warn!(
                subsystem = "client",
                component = "http",
                method = %method,
                path,
                duration_ms = elapsed,
                slow = true,
                "Slow request"
            );
        }

        if status == StatusCode::UNAUTHORIZED && method != Method::GET {
            self.force_logout();
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: extract_message(&body, status),
            });
        }

        Ok(response)
    }

    fn force_logout(&self) {
        let route = self.navigator.current_route();
        if defaults::UNAUTHENTICATED_ROUTES.contains(&route.as_str()) {
            return;
        }
        warn!(
            subsystem = "client",
            component = "http",
            route = %route,
            "Unauthorized mutation, clearing session"
        );
        self.tokens.clear();
        self.navigator.navigate(defaults::LOGIN_ROUTE);
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("failed to parse response: {}", e)))
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Django REST Framework bodies carry `detail`; some endpoints use
/// `message`. Anything else falls back to the raw body, then to the status
/// reason.
fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["detail", "message"] {
            if let Some(message) = value.get(field).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
