use crate::storage::GENERIC_DATA_STORE;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

use super::postgres::*;
use super::sqlite::*;

pub struct UserStore;

impl UserStore {
    /// Initialize the user directory tables
    pub(crate) async fn init() -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_tables_sqlite(pool).await,
            (_, Some(pool)) => create_tables_postgres(pool).await,
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Get an account by its ID
    #[tracing::instrument(fields(user_id = %id))]
    pub async fn get_user(id: &str) -> Result<Option<User>, UserError> {
        Self::get_user_by(UserSearchField::Id(id.to_string())).await
    }

    /// Get an account by its email, the sole matching key for sign-in
    #[tracing::instrument(fields(email = %email))]
    pub async fn get_user_by_email(email: &str) -> Result<Option<User>, UserError> {
        Self::get_user_by(UserSearchField::Email(email.to_string())).await
    }

    pub(crate) async fn get_user_by(field: UserSearchField) -> Result<Option<User>, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            get_user_by_field_sqlite(pool, &field).await
        } else if let Some(pool) = store.as_postgres() {
            get_user_by_field_postgres(pool, &field).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(Some(_)) => {
                tracing::debug!(found = true, "Account lookup completed");
            }
            Ok(None) => {
                tracing::debug!(found = false, "Account lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(error = %e, "Account lookup failed");
            }
        }

        result
    }

    /// Create a new account.
    ///
    /// Plain INSERT: the UNIQUE constraint on email is the only safeguard
    /// against two near-simultaneous first sign-ins racing to create the same
    /// account, and a lost race surfaces as `UserError::DuplicateEmail`.
    #[tracing::instrument(skip(user), fields(user_id = %user.id))]
    pub async fn insert_user(user: User) -> Result<User, UserError> {
        tracing::debug!(email = %user.email, "Creating account");
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            insert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => {
                tracing::info!(
                    user_id = %user.id,
                    sequence_number = user.sequence_number,
                    "Account created"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Account creation failed");
            }
        }

        result
    }

    /// Create or update an account by id
    #[tracing::instrument(skip(user), fields(user_id = %user.id))]
    pub async fn upsert_user(user: User) -> Result<User, UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            upsert_user_sqlite(pool, user).await
        } else if let Some(pool) = store.as_postgres() {
            upsert_user_postgres(pool, user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Delete an account by id
    #[tracing::instrument(fields(user_id = %id))]
    pub async fn delete_user(id: &str) -> Result<(), UserError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;

    fn test_user(id: &str, email: &str) -> User {
        User::new(
            id.to_string(),
            email.to_string(),
            "Store Customer".to_string(),
            "Store".to_string(),
            "Customer".to_string(),
            "digest".to_string(),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_insert_and_get_user() {
        init_test_environment().await;

        let user = test_user("insert-get-id", "insert-get@example.com");
        let stored = UserStore::insert_user(user.clone())
            .await
            .expect("inserting a fresh account should succeed");

        assert!(stored.sequence_number.is_some());

        let fetched = UserStore::get_user("insert-get-id")
            .await
            .expect("lookup should succeed")
            .expect("the inserted account should be found");

        assert_eq!(fetched.email, "insert-get@example.com");
        assert_eq!(fetched.display_name, "Store Customer");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_user_by_email() {
        init_test_environment().await;

        let user = test_user("by-email-id", "by-email@example.com");
        UserStore::insert_user(user)
            .await
            .expect("inserting a fresh account should succeed");

        let fetched = UserStore::get_user_by_email("by-email@example.com")
            .await
            .expect("lookup should succeed")
            .expect("the inserted account should be found");

        assert_eq!(fetched.id, "by-email-id");

        let missing = UserStore::get_user_by_email("nobody@example.com")
            .await
            .expect("lookup should succeed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_insert_duplicate_email_is_rejected() {
        init_test_environment().await;

        let first = test_user("dup-a", "duplicate@example.com");
        UserStore::insert_user(first)
            .await
            .expect("first insert should succeed");

        let second = test_user("dup-b", "duplicate@example.com");
        let result = UserStore::insert_user(second).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail)));
    }

    #[tokio::test]
    #[serial]
    async fn test_upsert_updates_existing_user() {
        init_test_environment().await;

        let user = test_user("upsert-id", "upsert@example.com");
        let mut stored = UserStore::insert_user(user)
            .await
            .expect("inserting a fresh account should succeed");

        stored.is_admin = true;
        UserStore::upsert_user(stored)
            .await
            .expect("upserting an existing account should succeed");

        let fetched = UserStore::get_user("upsert-id")
            .await
            .expect("lookup should succeed")
            .expect("the account should still exist");

        assert!(fetched.is_admin);
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_user() {
        init_test_environment().await;

        let user = test_user("delete-id", "delete@example.com");
        UserStore::insert_user(user)
            .await
            .expect("inserting a fresh account should succeed");

        UserStore::delete_user("delete-id")
            .await
            .expect("deleting should succeed");

        let fetched = UserStore::get_user("delete-id")
            .await
            .expect("lookup should succeed");
        assert!(fetched.is_none());
    }
}
