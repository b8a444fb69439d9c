//! Central configuration for the google_login_axum crate

use std::sync::LazyLock;

use google_login::GL_ROUTE_PREFIX;

/// URL of the login page, the target of failure redirects
/// Default: "/auth/google/login"
pub static GL_LOGIN_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("GL_LOGIN_URL").unwrap_or_else(|_| format!("{}/login", *GL_ROUTE_PREFIX))
});
