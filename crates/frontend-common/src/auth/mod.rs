//! Session state: token storage, claims and the Yew context around them

pub mod claims;
pub mod context;
pub mod error;
pub mod error_messages;
pub mod session;
pub mod storage;

// Re-export commonly used items
pub use claims::{Claims, decode_claims};
pub use context::{
    SessionAction, SessionContext, SessionProvider, SessionState, use_auth_api,
    use_is_authenticated, use_session,
};
pub use error::AuthError;
pub use session::{Session, SessionStore, exchange_credentials, now_millis};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
