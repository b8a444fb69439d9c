mod client;
mod config;
mod errors;
mod types;

pub use errors::OAuth2Error;
pub use types::{CallbackQuery, GoogleUserInfo, OAuthCredentials};

pub(crate) use client::{build_authorization_url, exchange_code_for_token, fetch_user_profile};
pub(crate) use config::GL_REDIRECT_URI;
