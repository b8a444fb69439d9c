//! Central configuration for the google_login crate

use std::sync::LazyLock;

/// Route prefix under which all login endpoints are mounted
///
/// Default: "/auth/google"
pub static GL_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GL_ROUTE_PREFIX").unwrap_or_else(|_| "/auth/google".to_string())
});

/// Where the browser is sent after a successful sign-in
///
/// The store's home location. Fixed for the lifetime of the process, never
/// derived from request data.
pub static GL_HOME_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("GL_HOME_URL").unwrap_or_else(|_| "/".to_string()));
