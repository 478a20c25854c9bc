//! Route gating for the admin dashboard

use super::{is_admin, Session};
use crate::config::SIGNIN_ROUTE;
use crate::models::UserRole;

/// Prefix of the authentication pages
pub const AUTH_PREFIX: &str = "/auth";

/// Landing page of administrators
pub const ADMIN_HOME: &str = "/admin-dashboard";

/// Landing page of other signed-in users
pub const PLAYER_HOME: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// Where a session should land after sign-in
pub fn redirect_path(session: Option<&Session>) -> &'static str {
    match session.map(|s| s.role) {
        None => SIGNIN_ROUTE,
        Some(UserRole::Admin) => ADMIN_HOME,
        Some(_) => PLAYER_HOME,
    }
}

/// Decide whether `path` may be shown to `session`
///
/// Only administrators get past the auth pages; an administrator opening an
/// auth page is sent to the dashboard instead.
pub fn guard_route(path: &str, session: Option<&Session>) -> RouteDecision {
    let admin = is_admin(session);
    let on_auth_page = path.starts_with(AUTH_PREFIX);

    match (admin, on_auth_page) {
        (false, false) => RouteDecision::Redirect(SIGNIN_ROUTE.to_string()),
        (true, true) => RouteDecision::Redirect(ADMIN_HOME.to_string()),
        _ => RouteDecision::Allow,
    }
}
