use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::oauth2::{GL_REDIRECT_URI, OAuthCredentials};

use super::errors::SettingsError;

/// The two OAuth application credentials entered on the admin settings page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct GoogleSettings {
    pub client_id: String,
    pub client_secret: String,
}

impl GoogleSettings {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Assemble the per-request credentials for the adapter calls.
    ///
    /// Fails when either field is empty; the flow must not reach Google with
    /// a half-configured client.
    pub fn credentials(&self) -> Result<OAuthCredentials, SettingsError> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(SettingsError::MissingCredentials);
        }

        Ok(OAuthCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            redirect_uri: GL_REDIRECT_URI.to_string(),
            scopes: vec!["email".to_string(), "profile".to_string()],
        })
    }

    /// Sanitized copy, applied before anything reaches storage.
    pub(crate) fn sanitized(&self) -> Self {
        Self {
            client_id: sanitize_text_field(&self.client_id),
            client_secret: sanitize_text_field(&self.client_secret),
        }
    }
}

/// Reduce admin-form input to a single line of plain text: control characters
/// (including newlines and tabs) are dropped, surrounding whitespace trimmed.
pub(crate) fn sanitize_text_field(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
