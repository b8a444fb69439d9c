use thiserror::Error;

use crate::oauth2::OAuth2Error;
use crate::session::SessionError;
use crate::settings::SettingsError;
use crate::userdb::UserError;
use crate::utils::UtilError;

use super::callback::CallbackStage;

/// Errors that can occur while coordinating the sign-in flow
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// General coordination error
    #[error("Coordination error: {0}")]
    Coordination(String),

    /// Google reports the email as unverified; the profile is not trusted
    /// for account linking
    #[error("Google email {0} is not verified")]
    UnverifiedEmail(String),

    /// Error from the settings store
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2(#[from] OAuth2Error),

    /// Error from the user directory
    #[error("User error: {0}")]
    User(#[from] UserError),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl CoordinationError {
    /// The step of the callback state machine that was in progress when the
    /// flow failed. Logged at the handler boundary; never shown to the user.
    pub fn stage(&self) -> CallbackStage {
        match self {
            Self::Settings(_) => CallbackStage::AwaitingCode,
            Self::OAuth2(OAuth2Error::Configuration(_)) => CallbackStage::AwaitingCode,
            Self::OAuth2(OAuth2Error::TokenExchange(_)) => CallbackStage::Exchanging,
            Self::OAuth2(OAuth2Error::FetchUserInfo(_)) => CallbackStage::FetchingProfile,
            Self::UnverifiedEmail(_) => CallbackStage::FetchingProfile,
            Self::Coordination(_) => CallbackStage::Resolving,
            Self::User(_) => CallbackStage::Resolving,
            Self::Utils(_) => CallbackStage::Resolving,
            Self::Session(_) => CallbackStage::SessionEstablished,
        }
    }
}
