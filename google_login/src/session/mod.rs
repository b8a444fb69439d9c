mod config;
mod errors;
mod store;
mod types;

pub use config::SESSION_COOKIE_NAME;
pub use errors::SessionError;
pub use store::{get_user_from_session, prepare_logout_response};
pub use types::User;

pub(crate) use store::create_session;
