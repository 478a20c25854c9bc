//! Sign-in and sign-up endpoints

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{AuthResponse, SignInRequest, SignUpRequest, UserRole};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/signin`
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/signin", request).await
    }

    /// `POST /auth/signup`
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
        self.client.post("/auth/signup", request).await
    }

    /// Sign in, refusing every account that is not an administrator
    pub async fn sign_in_admin(&self, request: &SignInRequest) -> Result<AuthResponse, ApiError> {
        let response = self.sign_in(request).await?;
        if response.role != UserRole::Admin {
            tracing::warn!(email = %response.email, role = %response.role, "non-admin sign-in refused");
            return Err(ApiError::AccessDenied(response.role.to_string()));
        }
        Ok(response)
    }
}
