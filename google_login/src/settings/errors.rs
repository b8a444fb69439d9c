use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SettingsError {
    #[error("Google OAuth credentials are not configured")]
    MissingCredentials,

    #[error("Storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_display() {
        assert_eq!(
            SettingsError::MissingCredentials.to_string(),
            "Google OAuth credentials are not configured"
        );
    }

    #[test]
    fn test_storage_display() {
        let error = SettingsError::Storage("table missing".to_string());
        assert_eq!(error.to_string(), "Storage error: table missing");
    }
}
