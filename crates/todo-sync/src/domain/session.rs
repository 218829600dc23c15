//! Session
//!
//! The bearer token plus the name shown in the navigation bar.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde_json::{Map, Value};

/// Claim carrying the user's name in tokens issued by the backend
pub const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";

/// Label used whenever the token does not yield a name
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    display_name: String,
}

impl Session {
    /// Build a session from a stored or freshly issued token
    ///
    /// Blank tokens do not make a session.
    pub fn from_token(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        let display_name = decode_display_name(&token);
        Some(Self { token, display_name })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// True when the token carried no usable name claim
    pub fn is_anonymous(&self) -> bool {
        self.display_name == FALLBACK_DISPLAY_NAME
    }

    /// Replace the name, e.g. with one cached at registration
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }
}

/// Extract the display name from the token's claim set
///
/// The signature is not verified; the name is for presentation only. Any
/// decoding problem yields [`FALLBACK_DISPLAY_NAME`].
pub fn decode_display_name(token: &str) -> String {
    match read_claims(token) {
        Ok(claims) => match claims.get(NAME_CLAIM).and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => {
                tracing::debug!("token has no name claim, using fallback");
                FALLBACK_DISPLAY_NAME.to_string()
            }
        },
        Err(e) => {
            tracing::debug!("failed to decode token claims: {}", e);
            FALLBACK_DISPLAY_NAME.to_string()
        }
    }
}

fn read_claims(token: &str) -> Result<Map<String, Value>, String> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| "token has no payload segment".to_string())?;
    let payload = payload.trim_end_matches('=');
    // Some issuers use the standard alphabet
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .map_err(|e| format!("invalid base64 payload: {}", e))?;
    serde_json::from_slice(&bytes).map_err(|e| format!("invalid claims JSON: {}", e))
}
