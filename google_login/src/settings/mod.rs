mod errors;
mod storage;
mod types;

pub use errors::SettingsError;
pub use storage::SettingsStore;
pub use types::GoogleSettings;

pub(crate) async fn init() -> Result<(), SettingsError> {
    SettingsStore::init().await
}
