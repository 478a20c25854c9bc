//! Quizdash client library
//!
//! Core of the quiz platform admin dashboard: an authenticated REST client
//! with retry and session-expiry handling, typed access to every resource,
//! per-resource state stores, bulk question import and the client-side
//! aggregations shown on the dashboard pages.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod import;
pub mod models;
pub mod store;
pub mod telemetry;

pub use auth::{InMemorySessionProvider, NoSession, Session, SessionProvider};
pub use config::{ClientConfig, RetryPolicy};
pub use error::{ApiError, AppError};
pub use http::{ApiClient, UnauthorizedHandler};
pub use store::ResourceStore;
