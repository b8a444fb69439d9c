use thiserror::Error;

use crate::userdb::UserError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Session error")]
    SessionError,

    #[error("Session expired error")]
    SessionExpiredError,

    #[error("Storage error: {0}")]
    Storage(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),

    /// Error from user directory operations
    #[error("User error: {0}")]
    User(#[from] UserError),
}
