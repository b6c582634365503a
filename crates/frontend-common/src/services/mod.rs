pub mod auth;

pub use auth::{AuthApiService, RegisterRequest, RegisteredUser, RegistrationRole, TokenResponse};
