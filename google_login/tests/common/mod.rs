//! Shared setup for integration tests
//!
//! Points the provider endpoints at an in-process mock of Google's token and
//! userinfo APIs, and backs the stores with shared-cache SQLite plus the
//! in-memory cache store.

pub mod mock_provider;

use std::sync::Once;

pub fn init_test_env() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        let defaults = [
            ("ORIGIN", "http://127.0.0.1:3000"),
            ("GENERIC_DATA_STORE_TYPE", "sqlite"),
            (
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:gl_integration_tests?mode=memory&cache=shared",
            ),
            ("GENERIC_CACHE_STORE_TYPE", "memory"),
            ("GENERIC_CACHE_STORE_URL", "memory://"),
            ("GL_TOKEN_URL", "http://127.0.0.1:9876/token"),
            ("GL_USERINFO_URL", "http://127.0.0.1:9876/userinfo"),
            // Seeds the settings table on first init
            ("GOOGLE_CLIENT_ID", "integration-client-id"),
            ("GOOGLE_CLIENT_SECRET", "integration-client-secret"),
        ];

        for (key, value) in defaults {
            if std::env::var(key).is_err() {
                unsafe { std::env::set_var(key, value) };
            }
        }
    });
}

pub async fn init_test_environment() {
    init_test_env();
    mock_provider::ensure_started();

    google_login::init()
        .await
        .expect("store initialization should succeed");
}
