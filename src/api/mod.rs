//! Resource access modules
//!
//! One typed pass-through per REST resource over the shared [`ApiClient`].
//! Every resource gets `get_all`, `get_by_id`, `create`, `update` and
//! `delete`; resource-specific endpoints live in `resources.rs`. Errors from
//! the client core are returned unchanged.

mod auth;
mod resource;
mod resources;

pub use auth::AuthApi;
pub use resource::{Resource, ResourceApi};
pub use resources::{Answers, Categories, GameSessions, Questions, Quizzes, Users};

use crate::http::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn users(&self) -> ResourceApi<'_, Users> {
        ResourceApi::new(self)
    }

    pub fn quizzes(&self) -> ResourceApi<'_, Quizzes> {
        ResourceApi::new(self)
    }

    pub fn categories(&self) -> ResourceApi<'_, Categories> {
        ResourceApi::new(self)
    }

    pub fn questions(&self) -> ResourceApi<'_, Questions> {
        ResourceApi::new(self)
    }

    pub fn answers(&self) -> ResourceApi<'_, Answers> {
        ResourceApi::new(self)
    }

    pub fn game_sessions(&self) -> ResourceApi<'_, GameSessions> {
        ResourceApi::new(self)
    }
}
