//! Session context and provider
//!
//! The provider reads durable storage once at mount and hands the session
//! to every component below it; nothing is kept in globals.

use super::session::{SessionStore, exchange_credentials, now_millis};
use super::storage::{BrowserStorage, KeyValueStore};
use super::AuthError;
use crate::config::api_base_url;
use crate::services::AuthApiService;
use std::rc::Rc;
use yew::prelude::*;

/// Session state shared through the component tree
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState<S = BrowserStorage> {
    store: SessionStore<S>,
}

/// Session context actions
pub enum SessionAction {
    /// Adopt a token just returned by the backend
    Establish(String),
    Logout,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionState>;

impl SessionState {
    /// Startup initialisation from `localStorage`
    pub fn restore() -> Self {
        Self::from_store(SessionStore::restore(BrowserStorage))
    }
}

impl<S: KeyValueStore> SessionState<S> {
    pub const fn from_store(store: SessionStore<S>) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    pub fn role(&self) -> String {
        self.store.role()
    }

    pub fn username(&self) -> String {
        self.store.username()
    }
}

impl<S: KeyValueStore + Clone> Reducible for SessionState<S> {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.store.clone();
        match action {
            SessionAction::Establish(token) => {
                store.establish(token, now_millis());
                tracing::info!(username = %store.username(), role = %store.role(), "session established");
            }
            SessionAction::Logout => store.logout(),
        }
        Rc::new(Self { store })
    }
}

/// API service handle; equality is identity
#[derive(Clone, Debug)]
pub struct ApiContext(Option<Rc<AuthApiService>>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
    /// Backend origin; the page's own origin when unset
    #[prop_or_default]
    pub api_base_url: Option<String>,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::restore);

    let api = {
        let base_url = props.api_base_url.clone();
        use_memo(base_url, |base_url| {
            let base_url = base_url.clone().unwrap_or_else(api_base_url);
            match AuthApiService::with_base_url(base_url) {
                Ok(service) => ApiContext(Some(Rc::new(service))),
                Err(err) => {
                    tracing::error!(%err, "failed to build API client");
                    ApiContext(None)
                }
            }
        })
    };

    html! {
        <ContextProvider<ApiContext> context={(*api).clone()}>
            <ContextProvider<SessionContext> context={session}>
                {props.children.clone()}
            </ContextProvider<SessionContext>>
        </ContextProvider<ApiContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().is_authenticated()
}

/// Hook to get the auth API service
#[hook]
pub fn use_auth_api() -> Option<Rc<AuthApiService>> {
    use_context::<ApiContext>().and_then(|api| api.0)
}

/// Run the login round trip and, only on success, establish the session
///
/// Overlapping calls are not serialised: whichever response resolves last
/// decides the stored token.
pub async fn login(
    session: &SessionContext,
    api: &AuthApiService,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    exchange_credentials(api, username, password, |token| {
        session.dispatch(SessionAction::Establish(token));
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryStorage;
    use crate::config::SessionConfig;

    fn state_over(storage: &MemoryStorage) -> Rc<SessionState<MemoryStorage>> {
        Rc::new(SessionState::from_store(SessionStore::restore(
            storage.clone(),
        )))
    }

    #[test]
    fn establish_action_authenticates_and_persists() {
        let storage = MemoryStorage::new();
        let state = state_over(&storage).reduce(SessionAction::Establish("a.b.c".into()));

        assert!(state.is_authenticated());
        assert_eq!(state.store().session().token(), "a.b.c");
        assert_eq!(storage.get(SessionConfig::TOKEN_KEY).as_deref(), Some("a.b.c"));
        assert_eq!(
            storage.get(SessionConfig::EXPIRES_KEY),
            Some(state.store().session().expires_at().to_string())
        );
    }

    #[test]
    fn later_establish_wins() {
        let storage = MemoryStorage::new();
        let state = state_over(&storage)
            .reduce(SessionAction::Establish("first.token.a".into()))
            .reduce(SessionAction::Establish("second.token.b".into()));

        assert_eq!(state.store().session().token(), "second.token.b");
        assert_eq!(
            storage.get(SessionConfig::TOKEN_KEY).as_deref(),
            Some("second.token.b")
        );
    }

    #[test]
    fn logout_action_clears_state_and_slots() {
        let storage = MemoryStorage::new();
        let state = state_over(&storage)
            .reduce(SessionAction::Establish("a.b.c".into()))
            .reduce(SessionAction::Logout);

        assert!(!state.is_authenticated());
        assert_eq!(state.store().session().token(), "");
        assert!(!storage.contains(SessionConfig::TOKEN_KEY));
        assert!(!storage.contains(SessionConfig::EXPIRES_KEY));
    }

    #[test]
    fn reduce_leaves_previous_state_untouched() {
        let storage = MemoryStorage::new();
        let before = state_over(&storage);
        let after = Rc::clone(&before).reduce(SessionAction::Establish("a.b.c".into()));

        assert!(!before.is_authenticated());
        assert!(after.is_authenticated());
    }
}
