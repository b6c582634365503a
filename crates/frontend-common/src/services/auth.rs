//! Authentication API service

use crate::auth::AuthError;
use crate::client::{ClientError, PublicClient};
use crate::config::SessionConfig;
use serde::{Deserialize, Serialize};

/// Successful answer of the login endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Roles a new account may ask for; anything else is rejected by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationRole {
    #[default]
    Sales,
    ProductManager,
}

impl RegistrationRole {
    pub const ALL: [Self; 2] = [Self::Sales, Self::ProductManager];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::ProductManager => "product_manager",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: RegistrationRole,
}

/// Account as echoed back by the registration endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_approved: bool,
}

/// Authentication API service
#[derive(Clone, Debug)]
pub struct AuthApiService {
    client: PublicClient,
}

impl AuthApiService {
    pub const fn new(client: PublicClient) -> Self {
        Self { client }
    }

    /// Service talking to `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        PublicClient::new(base_url).map(Self::new)
    }

    pub const fn client(&self) -> &PublicClient {
        &self.client
    }

    /// Exchange credentials for a bearer token (form-encoded, no retries)
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, AuthError> {
        let request = self
            .client
            .request(reqwest::Method::POST, SessionConfig::LOGIN_ENDPOINT)
            .form(&[("username", username), ("password", password)]);

        let response: TokenResponse = self.client.execute(request).await.inspect_err(|err| {
            tracing::warn!(%err, "login request failed");
        })?;

        if response.access_token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        Ok(response)
    }

    /// Create an account; it stays unusable until an administrator approves it
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, AuthError> {
        let builder = self
            .client
            .request(reqwest::Method::POST, SessionConfig::REGISTER_ENDPOINT)
            .json(request);

        let user: RegisteredUser = self.client.execute(builder).await?;
        tracing::info!(username = %user.username, approved = user.is_approved, "account registered");
        Ok(user)
    }
}
