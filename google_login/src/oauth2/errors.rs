use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    #[error("Fetch user info error: {0}")]
    FetchUserInfo(String),
}
