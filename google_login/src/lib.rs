//! google-login - "Login with Google" for Rust storefronts
//!
//! This crate implements the server side of a Google sign-in flow for an
//! e-commerce site: building the consent-screen URL, exchanging the
//! authorization code for an access token, fetching the Google profile, and
//! linking that profile to a local customer account (creating one when the
//! email is unseen) before establishing a cookie-backed session.

mod config;
mod coordination;
mod oauth2;
mod session;
mod settings;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{GL_HOME_URL, GL_ROUTE_PREFIX};

pub use coordination::{
    CallbackOutcome, CallbackStage, CoordinationError, handle_google_callback,
    prepare_google_auth_url,
};

pub use oauth2::{CallbackQuery, GoogleUserInfo, OAuth2Error, OAuthCredentials};

pub use session::{
    SESSION_COOKIE_NAME, SessionError, User as SessionUser, get_user_from_session,
    prepare_logout_response,
};

pub use settings::{GoogleSettings, SettingsError, SettingsStore};

pub use userdb::{User, UserError, UserStore};

pub use utils::UtilError;

/// Initialize the stores backing the login flow.
///
/// Connects the generic data/cache stores, creates the user and settings
/// tables, and seeds the OAuth credentials from the environment when the
/// settings table is empty. Call once at application startup before mounting
/// the routes.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    settings::init().await?;
    Ok(())
}
