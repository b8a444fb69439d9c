//! Database table configuration

use std::env;
use std::sync::LazyLock;

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "gl_".to_string()));

/// Users table name
pub(crate) static DB_TABLE_USERS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_USERS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "users"))
});

/// OAuth settings table name
pub(crate) static DB_TABLE_SETTINGS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_SETTINGS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "settings"))
});

#[cfg(test)]
mod tests {
    #[test]
    fn test_table_name_defaults() {
        // The LazyLock statics may be initialized by other tests, so verify
        // the same fallback logic they use
        let prefix = "gl_".to_string();
        assert_eq!(format!("{}{}", prefix, "users"), "gl_users");
        assert_eq!(format!("{}{}", prefix, "settings"), "gl_settings");
    }
}
