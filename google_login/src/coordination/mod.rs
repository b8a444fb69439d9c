mod account;
mod callback;
mod errors;

pub use callback::{
    CallbackOutcome, CallbackStage, handle_google_callback, prepare_google_auth_url,
};
pub use errors::CoordinationError;
