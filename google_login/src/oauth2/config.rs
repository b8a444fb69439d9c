use std::{env, sync::LazyLock, time::Duration};

use crate::config::GL_ROUTE_PREFIX;

/// Google's OAuth2 consent-screen endpoint
pub(crate) static GL_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GL_AUTH_URL")
        .ok()
        .unwrap_or("https://accounts.google.com/o/oauth2/v2/auth".to_string())
});

/// Google's token endpoint for the authorization-code exchange
pub(crate) static GL_TOKEN_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GL_TOKEN_URL")
        .ok()
        .unwrap_or("https://oauth2.googleapis.com/token".to_string())
});

/// Google's userinfo endpoint
pub(crate) static GL_USERINFO_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GL_USERINFO_URL")
        .ok()
        .unwrap_or("https://www.googleapis.com/oauth2/v2/userinfo".to_string())
});

/// Redirect URI registered with Google; the callback route of this crate
pub(crate) static GL_REDIRECT_URI: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{}{}/callback",
        env::var("ORIGIN").expect("Missing ORIGIN!"),
        GL_ROUTE_PREFIX.as_str()
    )
});

/// Timeout applied to both outbound provider calls, in seconds
pub(super) static GL_HTTP_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    env::var("GL_HTTP_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10)
});

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(*GL_HTTP_TIMEOUT))
        .build()
        .expect("Failed to build HTTP client")
});

pub(super) fn get_client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}
