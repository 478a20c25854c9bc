//! Quiz platform data models
//!
//! Wire shapes of the entities exposed by the remote API, together with
//! the DTOs accepted by its create/update/bulk endpoints. All entities are
//! owned by the server; the client only holds transient copies.

pub mod answer;
pub mod auth;
pub mod category;
pub mod game_session;
pub mod question;
pub mod quiz;
pub mod timestamp;
pub mod user;

pub use answer::*;
pub use auth::*;
pub use category::*;
pub use game_session::*;
pub use question::*;
pub use quiz::*;
pub use timestamp::parse_timestamp;
pub use user::*;

use chrono::{DateTime, Utc};

/// Server-assigned identifier
pub type EntityId = i64;

/// An entity addressable by its server-assigned id
pub trait Entity {
    fn id(&self) -> EntityId;
}

/// An entity carrying a server-side creation timestamp
pub trait Timestamped {
    /// Raw `createdAt` value as sent by the server
    fn created_at(&self) -> Option<&str>;

    /// Parsed creation time; `None` when absent or malformed
    fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at().and_then(parse_timestamp)
    }
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }
            }

            impl Timestamped for $ty {
                fn created_at(&self) -> Option<&str> {
                    self.created_at.as_deref()
                }
            }
        )*
    };
}

impl_entity!(User, Quiz, Category, Question, Answer, GameSession);
