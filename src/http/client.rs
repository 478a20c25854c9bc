//! Request sending with auth injection, retry and session-expiry hooks

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::{auth_token, SessionProvider};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Receives session-expiry events (HTTP 401)
///
/// The client does not navigate anywhere itself; the host decides what a
/// redirect to `signin_route` means. The failed call still returns its error.
pub trait UnauthorizedHandler: Send + Sync {
    fn on_unauthorized(&self, signin_route: &str);
}

impl<F> UnauthorizedHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_unauthorized(&self, signin_route: &str) {
        self(signin_route)
    }
}

/// Default handler: only logs
pub struct LogOnlyUnauthorized;

impl UnauthorizedHandler for LogOnlyUnauthorized {
    fn on_unauthorized(&self, signin_route: &str) {
        tracing::warn!(route = signin_route, "session expired, sign in again");
    }
}

/// REST API client
pub struct ApiClient {
    http_client: reqwest::Client,
    config: ClientConfig,
    session: Arc<dyn SessionProvider>,
    unauthorized: Arc<dyn UnauthorizedHandler>,
}

impl ApiClient {
    /// Build the client; fails only if the TLS backend cannot be initialised
    pub fn new(config: ClientConfig, session: Arc<dyn SessionProvider>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
            session,
            unauthorized: Arc::new(LogOnlyUnauthorized),
        })
    }

    /// Replace the session-expiry handler
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.unauthorized = handler;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the decoded JSON body
    ///
    /// Empty bodies come back as `Value::Null`, non-JSON bodies as a string.
    /// Retries follow `config.retry`; each call keeps its own retry counter,
    /// so concurrent requests back off independently and the attempts of one
    /// call are strictly sequential.
    pub async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.config.url(path);
        let policy = &self.config.retry;
        let mut retry_count = 0;

        loop {
            let err = match self.send_once(&method, &url, body).await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if err.is_unauthorized() {
                tracing::warn!(%method, %url, "received 401, notifying unauthorized handler");
                self.unauthorized.on_unauthorized(&self.config.signin_route);
                return Err(err);
            }

            if !err.is_retryable(policy) || retry_count >= policy.max_retries {
                tracing::debug!(%method, %url, error = %err, "request failed");
                return Err(err);
            }

            retry_count += 1;
            let delay = policy.delay_for(retry_count);
            tracing::warn!(
                %method,
                %url,
                retry = retry_count,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "retrying request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.send(Method::GET, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let value = self.send(Method::POST, path, Some(&body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        let value = self.send(Method::PATCH, path, Some(&body)).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// DELETE; whatever the server answers on success is discarded
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, path, None).await.map(|_| ())
    }

    async fn send_once(&self, method: &Method, url: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let mut request = self.http_client.request(method.clone(), url);
        if let Some(auth) = self.auth_header().await {
            request = request.header(AUTHORIZATION, auth);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, url, "sending request");
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }

    /// Resolve the bearer header; a failing session lookup never blocks the request
    async fn auth_header(&self) -> Option<HeaderValue> {
        let session = match self.session.current_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "could not resolve session, sending request without token");
                return None;
            }
        };

        let token = auth_token(session.as_ref())?;
        match HeaderValue::try_from(format!("Bearer {}", token)) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("session token is not a valid header value, omitting it");
                None
            }
        }
    }
}
