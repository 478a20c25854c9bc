//! Client configuration
//!
//! Fixed at construction time. `ClientConfig::from_env` reads the API base
//! URL from the environment and falls back to the local development server.

use std::time::Duration;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_API_BASE_URL";

/// Optional override of the request timeout, in milliseconds
pub const TIMEOUT_ENV: &str = "QUIZDASH_TIMEOUT_MS";

/// Used when `NEXT_PUBLIC_API_BASE_URL` is unset or empty
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default request timeout (30 000 ms)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Route the host navigates to when the session has expired
pub const SIGNIN_ROUTE: &str = "/auth/signin";

/// Retry policy applied to failed requests
///
/// Only 5xx responses are retried. The wait before retry `n` is
/// `n * base_delay` (1s, 2s, 3s with the defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt
    pub max_retries: u32,
    /// Linear backoff step
    pub base_delay: Duration,
    /// Also retry requests that timed out without a response
    pub retry_on_timeout: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            retry_on_timeout: false,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before the given retry (1-based)
    pub fn delay_for(&self, retry_count: u32) -> Duration {
        self.base_delay * retry_count
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Per-attempt request timeout
    pub timeout: Duration,
    /// Retry policy for failed requests
    pub retry: RetryPolicy,
    /// Route passed to the unauthorized handler on 401
    pub signin_route: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            signin_route: SIGNIN_ROUTE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the given base URL, defaults elsewhere
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Build the configuration from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self {
            timeout,
            ..Self::new(base_url)
        }
    }

    /// Replace the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout, Duration::from_millis(30_000));
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.signin_route, "/auth/signin");
    }

    #[test]
    fn test_linear_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(1), Duration::from_millis(1000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(3), Duration::from_millis(3000));
    }

    #[test]
    fn test_url_joining() {
        let config = ClientConfig::new("https://quiz.example.com/api/");
        assert_eq!(config.url("/users"), "https://quiz.example.com/api/users");
        assert_eq!(config.url("quizzes/3"), "https://quiz.example.com/api/quizzes/3");
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(BASE_URL_ENV, "https://api.quiz.test/");
        std::env::set_var(TIMEOUT_ENV, "5000");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://api.quiz.test");
        assert_eq!(config.timeout, Duration::from_millis(5000));

        std::env::set_var(BASE_URL_ENV, "  ");
        std::env::set_var(TIMEOUT_ENV, "not-a-number");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }
}
