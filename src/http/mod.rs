//! HTTP client core
//!
//! A single configured client shared by every resource module:
//! - base URL, JSON default headers and a 30s timeout
//! - bearer token injected from the current session before each request
//! - linear-backoff retry of 5xx responses
//! - 401 reported to an [`UnauthorizedHandler`] so the host can navigate to sign-in

mod client;

pub use client::{ApiClient, LogOnlyUnauthorized, UnauthorizedHandler};
pub use reqwest::Method;
