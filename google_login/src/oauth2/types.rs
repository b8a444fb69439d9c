use serde::{Deserialize, Serialize};

/// Everything needed to talk to Google for one request.
///
/// Assembled from the persisted settings at the start of each flow and passed
/// explicitly into every adapter call; nothing about the client lives in
/// shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: Vec<String>,
}

/// Opaque access token returned by the token endpoint.
///
/// Held only for the duration of the callback request; never persisted.
#[derive(Clone)]
pub(crate) struct AccessToken(String);

impl AccessToken {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    pub(crate) fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

// The user data we'll get back from Google
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: String,
    pub verified_email: bool,
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    pub picture: Option<String>,
    pub hd: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(super) struct TokenResponse {
    pub(super) access_token: String,
    token_type: String,
    expires_in: u64,
    scope: String,
    refresh_token: Option<String>,
    id_token: Option<String>,
}

/// Query parameters arriving on the callback route.
///
/// The code is optional: a request without one is not an error, it simply
/// falls through to normal page rendering.
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}
