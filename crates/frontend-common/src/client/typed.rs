//! Typed API clients that make the authentication requirement explicit

use super::ClientError;
use crate::auth::Session;
use reqwest::{Client, ClientBuilder, header};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("sales-frontend/", env!("CARGO_PKG_VERSION"));

fn build_client() -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

    // The browser sets its own user agent
    #[cfg(target_arch = "wasm32")]
    let client = ClientBuilder::new().build()?;

    Ok(client)
}

async fn execute<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Client for endpoints that don't require a session
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

impl PublicClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_client()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Execute a request, decoding a JSON body on success
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute(request).await
    }

    /// Attach a bearer token
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

/// Client for protected endpoints, sends `Authorization: Bearer <token>`
#[derive(Clone, Debug)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AuthenticatedClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        Ok(PublicClient::new(base_url)?.authenticate(token))
    }

    /// A client for the current session, or `None` once it has lapsed
    pub fn for_session(
        base_url: impl Into<String>,
        session: &Session,
        now_ms: i64,
    ) -> Result<Option<Self>, ClientError> {
        if !session.is_authenticated_at(now_ms) {
            return Ok(None);
        }
        Self::new(base_url, session.token()).map(Some)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request, decoding a JSON body on success
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = execute(request).await;
        if let Err(ClientError::Unauthorized(_)) = &result {
            tracing::warn!("backend rejected the session token");
        }
        result
    }
}
