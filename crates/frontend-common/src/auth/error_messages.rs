//! User-friendly error message mappings

use super::AuthError;
use crate::client::ClientError;
use serde::Deserialize;

/// Error body the backend sends with 4xx answers
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn backend_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.detail)
        .filter(|detail| !detail.is_empty())
}

/// Convert an auth failure into something a person can act on
///
/// The server already phrases its rejections for users, so its `detail`
/// wins whenever there is one.
pub fn get_user_friendly_error(error: &AuthError) -> String {
    match error {
        AuthError::Client(client_error) => {
            if let Some(detail) = client_error.body().and_then(backend_detail) {
                return detail;
            }
            match client_error {
                ClientError::Request(_) => "Unable to reach the server. Please try again.".into(),
                ClientError::BadRequest(_) | ClientError::Unauthorized(_) => {
                    "Incorrect username or password.".into()
                }
                ClientError::Forbidden(_) => "This account is not allowed to sign in yet.".into(),
                _ => "Sign-in failed. Please try again later.".into(),
            }
        }
        AuthError::MissingToken => "The server returned an unexpected response.".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_backend_detail() {
        let err = AuthError::Client(ClientError::Forbidden(
            r#"{"detail":"account awaiting approval"}"#.into(),
        ));
        assert_eq!(err.user_message(), "account awaiting approval");
    }

    #[test]
    fn falls_back_per_status() {
        let err = AuthError::Client(ClientError::BadRequest("<html>".into()));
        assert_eq!(err.user_message(), "Incorrect username or password.");

        let err = AuthError::Client(ClientError::ServerError {
            status: 500,
            message: r#"{"detail":""}"#.into(),
        });
        assert_eq!(err.user_message(), "Sign-in failed. Please try again later.");
    }

    #[test]
    fn missing_token_message() {
        assert_eq!(
            AuthError::MissingToken.user_message(),
            "The server returned an unexpected response."
        );
    }
}
