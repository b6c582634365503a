//! Frontend configuration

/// Session configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Durable storage slot holding the raw bearer token
    pub const TOKEN_KEY: &'static str = "sales-token";

    /// Durable storage slot holding the expiry as decimal epoch milliseconds
    pub const EXPIRES_KEY: &'static str = "sales-token-exp";

    /// Client-side session lifetime applied at login
    pub const SESSION_LIFETIME_MS: i64 = 1000 * 60 * 60 * 24 * 30; // 30 days

    /// Role reported when the token carries none
    pub const DEFAULT_ROLE: &'static str = "sales";

    /// Credential exchange endpoint
    pub const LOGIN_ENDPOINT: &'static str = "/api/auth/login";

    /// Account registration endpoint
    pub const REGISTER_ENDPOINT: &'static str = "/api/auth/register";
}

/// Routing configuration
pub struct RouteConfig;

impl RouteConfig {
    /// Every path starting with this marker requires a session
    pub const PROTECTED_PREFIX: &'static str = "/app";

    /// Where unauthenticated navigation ends up
    pub const LOGIN_PATH: &'static str = "/login";
}

/// Base URL for API calls: the window origin in a browser, relative otherwise
pub fn api_base_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}
