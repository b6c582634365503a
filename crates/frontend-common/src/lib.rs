//! Client-side session and routing layer of the sales console

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod router;
pub mod services;

pub use auth::{AuthError, Session, SessionProvider, SessionStore, use_session};
pub use client::{AuthenticatedClient, ClientError, PublicClient};
pub use components::LoadingSpinner;
pub use config::{RouteConfig, SessionConfig};
pub use router::{AppRoute, GuardedSwitch, Route};
pub use services::AuthApiService;
