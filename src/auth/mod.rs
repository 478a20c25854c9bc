//! Session handling
//!
//! The session (authenticated identity + bearer token) is owned by an
//! external authentication subsystem. The HTTP client only reads it, once
//! per request, through the [`SessionProvider`] passed at construction.
//! Expired sessions are never handed out, so their token is not sent.
//!
//! Hosts that route pages decide navigation with [`guard_route`] and
//! [`redirect_path`]: signed-out or non-admin users go to sign-in, admins
//! on an `/auth` page go to the admin home.

mod guard;
mod jwt;

pub use guard::{guard_route, redirect_path, RouteDecision, ADMIN_HOME, AUTH_PREFIX, PLAYER_HOME};
pub use jwt::{decode_jwt_claims, is_token_expired, JwtClaims};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{AuthResponse, UserRole};

/// How long a session stays valid after sign-in, in days
pub const SESSION_MAX_AGE_DAYS: i64 = 30;

/// Session resolution error
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session unavailable: {0}")]
    Unavailable(String),
}

/// Authenticated identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
    /// Bearer token sent with every API request
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Session created from a successful sign-in at `now`
    pub fn from_auth_response(response: AuthResponse, now: DateTime<Utc>) -> Self {
        Self {
            user_id: response.id,
            name: Some(response.name),
            email: Some(response.email),
            role: response.role,
            token: response.token,
            expires_at: now + Duration::days(SESSION_MAX_AGE_DAYS),
        }
    }

    /// Session for a bare bearer token, described by its unverified claims
    ///
    /// Missing claims fall back to an anonymous `user` session valid for
    /// [`SESSION_MAX_AGE_DAYS`]; the server still decides what the token may do.
    pub fn from_token(token: impl Into<String>, now: DateTime<Utc>) -> Self {
        let token = token.into();
        let claims = decode_jwt_claims(&token);

        let role = claims
            .as_ref()
            .and_then(|c| c.role.as_deref())
            .and_then(parse_role)
            .unwrap_or(UserRole::User);
        let expires_at = claims
            .as_ref()
            .and_then(|c| c.exp)
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
            .unwrap_or_else(|| now + Duration::days(SESSION_MAX_AGE_DAYS));

        Self {
            user_id: claims.and_then(|c| c.sub).unwrap_or_default(),
            name: None,
            email: None,
            role,
            token,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

fn parse_role(raw: &str) -> Option<UserRole> {
    match raw.to_ascii_lowercase().as_str() {
        "admin" => Some(UserRole::Admin),
        "user" => Some(UserRole::User),
        "player" => Some(UserRole::Player),
        _ => None,
    }
}

/// Source of the current session
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the current session; `Ok(None)` when signed out
    async fn current_session(&self) -> Result<Option<Session>, SessionError>;
}

/// Provider for clients that never authenticate
pub struct NoSession;

#[async_trait]
impl SessionProvider for NoSession {
    async fn current_session(&self) -> Result<Option<Session>, SessionError> {
        Ok(None)
    }
}

/// Session held in memory, replaced on sign-in and cleared on sign-out
pub struct InMemorySessionProvider {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self {
            session: RwLock::new(None),
        }
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    pub async fn set(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.session.write().await = None;
    }
}

impl Default for InMemorySessionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, SessionError> {
        let session = self.session.read().await;
        Ok(session.as_ref().filter(|s| !s.is_expired(Utc::now())).cloned())
    }
}

pub fn is_authenticated(session: Option<&Session>) -> bool {
    session.is_some()
}

pub fn is_admin(session: Option<&Session>) -> bool {
    matches!(session, Some(s) if s.role == UserRole::Admin)
}

/// Bearer token of the session, if any
pub fn auth_token(session: Option<&Session>) -> Option<&str> {
    session.map(|s| s.token.as_str()).filter(|token| !token.is_empty())
}
