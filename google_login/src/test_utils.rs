//! Shared test initialization
//!
//! Installs the environment the LazyLock-backed configuration expects
//! (in-memory cache, shared-cache SQLite, unroutable provider endpoints) and
//! ensures the tables exist. Values already present in the environment win,
//! so a .env file can still steer a local run.

use std::sync::Once;

pub(crate) fn init_test_env() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        let defaults = [
            ("ORIGIN", "http://127.0.0.1:3000"),
            ("GENERIC_DATA_STORE_TYPE", "sqlite"),
            (
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:gl_unit_tests?mode=memory&cache=shared",
            ),
            ("GENERIC_CACHE_STORE_TYPE", "memory"),
            ("GENERIC_CACHE_STORE_URL", "memory://"),
            // Closed port: outbound provider calls fail fast without a
            // network round-trip
            ("GL_TOKEN_URL", "http://127.0.0.1:1/token"),
            ("GL_USERINFO_URL", "http://127.0.0.1:1/userinfo"),
        ];

        for (key, value) in defaults {
            if std::env::var(key).is_err() {
                unsafe { std::env::set_var(key, value) };
            }
        }
    });
}

pub(crate) async fn init_test_environment() {
    init_test_env();

    // Tables are created with IF NOT EXISTS, so repeated calls are harmless
    if let Err(e) = crate::userdb::UserStore::init().await {
        eprintln!("Warning: Failed to initialize UserStore: {e}");
    }
    if let Err(e) = crate::settings::SettingsStore::init().await {
        eprintln!("Warning: Failed to initialize SettingsStore: {e}");
    }
}
