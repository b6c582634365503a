//! Bearer-token session and its persistent store

use super::claims::{Claims, decode_claims};
use super::storage::KeyValueStore;
use super::AuthError;
use crate::config::SessionConfig;
use crate::services::AuthApiService;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Exchange credentials and hand the issued token to `establish`
///
/// `establish` runs only when the backend issued a token; on any failure it
/// is never called, so whatever session the caller holds stays as it was.
pub async fn exchange_credentials(
    api: &AuthApiService,
    username: &str,
    password: &str,
    establish: impl FnOnce(String),
) -> Result<(), AuthError> {
    let response = api.login(username, password).await?;
    establish(response.access_token);
    Ok(())
}

/// Token plus client-side expiry; an empty token means no session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
    expires_at: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Expiry in epoch milliseconds
    pub const fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// Advisory check only: the token itself is never verified here
    pub fn is_authenticated_at(&self, now_ms: i64) -> bool {
        !self.token.is_empty() && now_ms < self.expires_at
    }

    pub fn claims(&self) -> Option<Claims> {
        decode_claims(&self.token)
    }

    pub fn role(&self) -> String {
        self.claims()
            .and_then(|claims| claims.role)
            .unwrap_or_else(|| SessionConfig::DEFAULT_ROLE.to_string())
    }

    pub fn username(&self) -> String {
        self.claims()
            .and_then(|claims| claims.sub)
            .unwrap_or_default()
    }
}

/// Session mirrored into two durable slots
#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore<S> {
    session: Session,
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Initialise from whatever the slots hold; absent or unparsable values
    /// fall back to an empty token and an expiry of zero
    pub fn restore(storage: S) -> Self {
        let token = storage.get(SessionConfig::TOKEN_KEY).unwrap_or_default();
        let expires_at = storage
            .get(SessionConfig::EXPIRES_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);

        tracing::debug!(
            has_token = !token.is_empty(),
            expires_at,
            "restored session from storage"
        );

        Self {
            session: Session::new(token, expires_at),
            storage,
        }
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_millis())
    }

    pub fn is_authenticated_at(&self, now_ms: i64) -> bool {
        self.session.is_authenticated_at(now_ms)
    }

    pub fn role(&self) -> String {
        self.session.role()
    }

    pub fn username(&self) -> String {
        self.session.username()
    }

    /// Adopt a freshly issued token, valid for the configured lifetime from `now_ms`
    pub fn establish(&mut self, token: impl Into<String>, now_ms: i64) {
        let expires_at = now_ms.saturating_add(SessionConfig::SESSION_LIFETIME_MS);
        self.session = Session::new(token, expires_at);
        self.storage
            .set(SessionConfig::TOKEN_KEY, self.session.token());
        self.storage
            .set(SessionConfig::EXPIRES_KEY, &expires_at.to_string());
    }

    /// Exchange credentials for a token and store it
    ///
    /// On failure the current session is left exactly as it was.
    pub async fn login(
        &mut self,
        api: &AuthApiService,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        exchange_credentials(api, username, password, |token| {
            self.establish(token, now_millis());
        })
        .await?;
        tracing::info!(username = %self.username(), role = %self.role(), "logged in");
        Ok(())
    }

    /// Forget the session in memory and in storage
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.storage.remove(SessionConfig::TOKEN_KEY);
        self.storage.remove(SessionConfig::EXPIRES_KEY);
        tracing::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::encode_test_token;
    use crate::auth::storage::MemoryStorage;

    const NOW: i64 = 1_760_000_000_000;

    #[test]
    fn authenticated_only_before_expiry() {
        let session = Session::new("t", NOW + 1);
        assert!(session.is_authenticated_at(NOW));
        assert!(!session.is_authenticated_at(NOW + 1));
        assert!(!session.is_authenticated_at(NOW + 2));
    }

    #[test]
    fn empty_token_is_never_authenticated() {
        let session = Session::new("", i64::MAX);
        assert!(!session.is_authenticated_at(NOW));
        assert!(!Session::default().is_authenticated_at(i64::MIN));
    }

    #[test]
    fn identity_from_token() {
        let session = Session::new(
            encode_test_token(r#"{"sub":"alice","role":"manager"}"#),
            NOW,
        );
        assert_eq!(session.username(), "alice");
        assert_eq!(session.role(), "manager");
    }

    #[test]
    fn identity_defaults_for_garbage() {
        for token in ["", "not-a-token", "x.y.z"] {
            let session = Session::new(token, NOW);
            assert_eq!(session.role(), "sales");
            assert_eq!(session.username(), "");
        }
    }

    #[test]
    fn restore_from_empty_storage() {
        let store = SessionStore::restore(MemoryStorage::new());
        assert_eq!(store.session(), &Session::default());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn restore_with_unparsable_expiry() {
        let storage = MemoryStorage::new();
        storage.set(SessionConfig::TOKEN_KEY, "a.b.c");
        storage.set(SessionConfig::EXPIRES_KEY, "soon");

        let store = SessionStore::restore(storage);
        assert_eq!(store.session().token(), "a.b.c");
        assert_eq!(store.session().expires_at(), 0);
        assert!(!store.is_authenticated_at(NOW));
    }

    #[test]
    fn establish_persists_and_survives_restore() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        store.establish("a.b.c", NOW);

        let expected = NOW + SessionConfig::SESSION_LIFETIME_MS;
        assert_eq!(store.session().expires_at(), expected);
        assert!(store.is_authenticated_at(NOW));
        assert_eq!(
            storage.get(SessionConfig::EXPIRES_KEY),
            Some(expected.to_string())
        );

        let reloaded = SessionStore::restore(storage);
        assert_eq!(reloaded.session(), store.session());
        assert_eq!(
            reloaded.is_authenticated_at(NOW),
            store.is_authenticated_at(NOW)
        );
    }

    #[test]
    fn session_lapses_after_thirty_days() {
        let mut store = SessionStore::restore(MemoryStorage::new());
        store.establish("a.b.c", NOW);
        let thirty_days = 30 * 24 * 60 * 60 * 1000;
        assert!(store.is_authenticated_at(NOW + thirty_days - 1));
        assert!(!store.is_authenticated_at(NOW + thirty_days));
    }

    #[test]
    fn logout_clears_memory_and_slots() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::restore(storage.clone());
        store.establish("a.b.c", NOW);

        store.logout();
        assert!(!store.is_authenticated_at(NOW));
        assert_eq!(store.session(), &Session::default());
        assert!(!storage.contains(SessionConfig::TOKEN_KEY));
        assert!(!storage.contains(SessionConfig::EXPIRES_KEY));

        // idempotent
        store.logout();
        assert!(!store.is_authenticated_at(NOW));
    }
}
