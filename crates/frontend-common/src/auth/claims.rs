//! Best-effort decoding of the token payload
//!
//! The payload is read for display only (who is signed in, which role).
//! Nothing here verifies a signature; the backend checks the token on
//! every protected request.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

/// Backend tokens use the URL-safe alphabet; hand-built ones often don't
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Claims the UI cares about
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    pub sub: Option<String>,
    pub role: Option<String>,
}

impl Claims {
    fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            sub: field("sub"),
            role: field("role"),
        }
    }
}

/// Decode the middle segment of a compact `header.payload.signature` token
///
/// Returns `None` for anything that isn't a token with a JSON object payload.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE
        .decode(payload)
        .or_else(|_| STANDARD.decode(payload))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(object) => Some(Claims::from_object(&object)),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &str) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!("eyJhbGciOiJIUzI1NiJ9.{}.c2ln", URL_SAFE_NO_PAD.encode(payload))
}
