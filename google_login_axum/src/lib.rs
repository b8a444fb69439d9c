//! Axum integration for the google-login crate
//!
//! Mount [`google_login_router`] under [`GL_ROUTE_PREFIX`] to get the login
//! trigger, the OAuth callback, a login page with the "Login with Google"
//! button, logout, and the admin settings form.

mod admin;
mod config;
mod error;
mod oauth2;
mod pages;
mod router;
mod session;

pub use config::GL_LOGIN_URL;
pub use error::IntoResponseError;
pub use router::{google_login_router, google_login_router_no_trace};
pub use session::AuthUser;

// Re-export the route prefix and initialization function from the core crate
pub use google_login::{GL_HOME_URL, GL_ROUTE_PREFIX, init};
