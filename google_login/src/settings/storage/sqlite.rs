use sqlx::{Pool, Sqlite};

use crate::settings::{errors::SettingsError, types::GoogleSettings};
use crate::storage::DB_TABLE_SETTINGS;

use super::store_type::SETTINGS_ROW_ID;

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            client_id TEXT NOT NULL,
            client_secret TEXT NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn load_settings_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<Option<GoogleSettings>, SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query_as::<_, GoogleSettings>(&format!(
        r#"
        SELECT client_id, client_secret FROM {} WHERE id = ?
        "#,
        table_name
    ))
    .bind(SETTINGS_ROW_ID)
    .fetch_optional(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))
}

pub(super) async fn upsert_settings_sqlite(
    pool: &Pool<Sqlite>,
    settings: &GoogleSettings,
) -> Result<(), SettingsError> {
    let table_name = DB_TABLE_SETTINGS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, client_id, client_secret, updated_at)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            client_id = excluded.client_id,
            client_secret = excluded.client_secret,
            updated_at = excluded.updated_at
        "#,
        table_name
    ))
    .bind(SETTINGS_ROW_ID)
    .bind(&settings.client_id)
    .bind(&settings.client_secret)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| SettingsError::Storage(e.to_string()))?;

    Ok(())
}
