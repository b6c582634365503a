//! Authentication errors

use crate::client::ClientError;
use thiserror::Error;

/// Failure of a login or registration round trip
///
/// Returned to the caller untouched; the session is never modified when
/// one of these is produced.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The backend answered 2xx without a usable `access_token`
    #[error("login response did not contain an access token")]
    MissingToken,
}

impl AuthError {
    /// Message suitable for showing next to the form
    pub fn user_message(&self) -> String {
        super::error_messages::get_user_friendly_error(self)
    }
}
