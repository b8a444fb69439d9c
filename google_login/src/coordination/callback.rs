use http::HeaderMap;

use crate::config::GL_HOME_URL;
use crate::oauth2::{
    CallbackQuery, build_authorization_url, exchange_code_for_token, fetch_user_profile,
};
use crate::session::create_session;
use crate::settings::{SettingsError, SettingsStore};

use super::account::resolve_account;
use super::errors::CoordinationError;

/// Steps of the callback state machine.
///
/// A request walks these in order; any failure is terminal for the request
/// and the user restarts the flow from the login link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStage {
    Idle,
    AwaitingCode,
    Exchanging,
    FetchingProfile,
    Resolving,
    SessionEstablished,
    Redirected,
    Failed,
}

/// What the HTTP layer should do after the callback handler ran.
#[derive(Debug)]
pub enum CallbackOutcome {
    /// No authorization code in the query. Not an error: the request falls
    /// through to normal page rendering.
    PassThrough,
    /// Session established; set the cookie headers and send the browser home.
    SignedIn {
        headers: HeaderMap,
        redirect_to: String,
    },
}

/// Build the consent-screen URL the login link points at, from the currently
/// persisted settings.
pub async fn prepare_google_auth_url() -> Result<String, CoordinationError> {
    let settings = SettingsStore::load()
        .await?
        .ok_or(SettingsError::MissingCredentials)?;
    let credentials = settings.credentials()?;

    Ok(build_authorization_url(&credentials)?)
}

/// Run the authorization-code callback: exchange the code, fetch the profile,
/// resolve the local account, and establish a session.
///
/// The two outbound calls are sequential; nothing is retried. Credentials are
/// loaded fresh from the settings store so an admin edit applies to the next
/// sign-in without a restart.
pub async fn handle_google_callback(
    query: &CallbackQuery,
) -> Result<CallbackOutcome, CoordinationError> {
    let Some(code) = query.code.as_deref() else {
        tracing::debug!(stage = ?CallbackStage::Idle, "No authorization code present, passing through");
        return Ok(CallbackOutcome::PassThrough);
    };

    tracing::debug!(stage = ?CallbackStage::AwaitingCode, "Authorization code received");
    let settings = SettingsStore::load()
        .await?
        .ok_or(SettingsError::MissingCredentials)?;
    let credentials = settings.credentials()?;

    tracing::debug!(stage = ?CallbackStage::Exchanging, "Exchanging authorization code");
    let token = exchange_code_for_token(&credentials, code).await?;

    tracing::debug!(stage = ?CallbackStage::FetchingProfile, "Fetching Google profile");
    let profile = fetch_user_profile(&token).await?;
    if !profile.verified_email {
        return Err(CoordinationError::UnverifiedEmail(profile.email));
    }

    tracing::debug!(stage = ?CallbackStage::Resolving, email = %profile.email, "Resolving local account");
    let user = resolve_account(&profile).await?;

    let headers = create_session(&user.id).await?;
    tracing::info!(
        stage = ?CallbackStage::SessionEstablished,
        user_id = %user.id,
        "Signed in via Google"
    );

    Ok(CallbackOutcome::SignedIn {
        headers,
        redirect_to: GL_HOME_URL.to_string(),
    })
}
