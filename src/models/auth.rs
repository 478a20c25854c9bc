//! Authentication payloads

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;

use super::UserRole;

/// Body of `POST /auth/signin`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of the sign-in and sign-up endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub token: String,
}
