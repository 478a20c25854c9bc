//! Game sessions
//!
//! Created by the game client when a player completes a quiz attempt.
//! Read-only from the dashboard except for administrative delete.

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use super::{EntityId, Quiz, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    /// Sent as a string by some API versions
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: EntityId,
    pub user_id: EntityId,
    pub quiz_id: EntityId,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameDto {
    pub score: f64,
    pub user_id: EntityId,
    pub quiz_id: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Server-side grouping returned by `GET /games/grouped`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedGameSessions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_score: Option<f64>,
    pub total_score: f64,
    pub user: User,
    #[serde(default)]
    pub games: Vec<GameSession>,
}
