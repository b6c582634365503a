//! HTTP clients for the sales backend

pub mod error;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedClient, PublicClient};
