mod cache_store;
mod config;
mod data_store;
mod errors;
mod types;

pub(crate) async fn init() -> Result<(), errors::StorageError> {
    let _ = *data_store::GENERIC_DATA_STORE;

    // Fails fast when the Redis backend is selected but unreachable
    cache_store::GENERIC_CACHE_STORE.lock().await.init().await?;

    Ok(())
}

pub(crate) use cache_store::GENERIC_CACHE_STORE;
pub(crate) use types::CacheData;

pub(crate) use config::{DB_TABLE_SETTINGS, DB_TABLE_USERS};
pub(crate) use data_store::GENERIC_DATA_STORE;
