use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => UserError::DuplicateEmail,
            _ => UserError::Storage(err.to_string()),
        }
    }
}
