use crate::storage::GENERIC_DATA_STORE;

use super::super::{errors::SettingsError, types::GoogleSettings};
use super::postgres::*;
use super::sqlite::*;

/// Single settings row; one Google application per deployment.
pub(crate) const SETTINGS_ROW_ID: &str = "google";

pub struct SettingsStore;

impl SettingsStore {
    /// Create the settings table and seed it from the environment.
    ///
    /// When no row exists yet, GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET are
    /// read once and persisted so a fresh deployment is usable before the
    /// admin page has ever been visited.
    pub(crate) async fn init() -> Result<(), SettingsError> {
        {
            let store = GENERIC_DATA_STORE.lock().await;

            match (store.as_sqlite(), store.as_postgres()) {
                (Some(pool), _) => create_tables_sqlite(pool).await?,
                (_, Some(pool)) => create_tables_postgres(pool).await?,
                _ => {
                    return Err(SettingsError::Storage(
                        "Unsupported database type".to_string(),
                    ));
                }
            }
        }

        if Self::load().await?.is_none() {
            let client_id = std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default();
            let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default();
            if !client_id.is_empty() && !client_secret.is_empty() {
                tracing::info!("Seeding Google OAuth settings from environment");
                Self::save(GoogleSettings::new(client_id, client_secret)).await?;
            }
        }

        Ok(())
    }

    /// Load the stored credentials, if any.
    #[tracing::instrument]
    pub async fn load() -> Result<Option<GoogleSettings>, SettingsError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            load_settings_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            load_settings_postgres(pool).await
        } else {
            Err(SettingsError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Persist the credentials, sanitizing both fields first.
    #[tracing::instrument(skip(settings))]
    pub async fn save(settings: GoogleSettings) -> Result<(), SettingsError> {
        let settings = settings.sanitized();
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            upsert_settings_sqlite(pool, &settings).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_settings_postgres(pool, &settings).await
        } else {
            Err(SettingsError::Storage(
                "Unsupported database type".to_string(),
            ))
        };

        match &result {
            Ok(()) => tracing::info!("Google OAuth settings saved"),
            Err(e) => tracing::error!(error = %e, "Failed to save Google OAuth settings"),
        }

        result
    }
}
