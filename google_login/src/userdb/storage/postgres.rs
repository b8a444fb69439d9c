use sqlx::{Pool, Postgres};

use crate::storage::DB_TABLE_USERS;
use crate::userdb::{
    errors::UserError,
    types::{User, UserSearchField},
};

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            sequence_number BIGSERIAL PRIMARY KEY,
            id TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            display_name TEXT NOT NULL,
            given_name TEXT NOT NULL,
            family_name TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#,
        table_name
    ))
    .execute(pool)
    .await?;

    Ok(())
}

pub(super) async fn get_user_by_field_postgres(
    pool: &Pool<Postgres>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let (column, value) = match field {
        UserSearchField::Id(id) => ("id", id),
        UserSearchField::Email(email) => ("email", email),
    };

    Ok(sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {} WHERE {} = $1
        "#,
        table_name, column
    ))
    .bind(value)
    .fetch_optional(pool)
    .await?)
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, email, display_name, given_name, family_name, password_hash, is_admin, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
        table_name
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.display_name)
    .bind(&user.given_name)
    .bind(&user.family_name)
    .bind(&user.password_hash)
    .bind(user.is_admin)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    // Re-read to pick up the assigned sequence number
    get_user_by_field_postgres(pool, &UserSearchField::Id(user.id.clone()))
        .await?
        .ok_or_else(|| UserError::Storage("Inserted account not found".to_string()))
}

pub(super) async fn upsert_user_postgres(
    pool: &Pool<Postgres>,
    user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, email, display_name, given_name, family_name, password_hash, is_admin, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (id) DO UPDATE SET
            email = excluded.email,
            display_name = excluded.display_name,
            given_name = excluded.given_name,
            family_name = excluded.family_name,
            password_hash = excluded.password_hash,
            is_admin = excluded.is_admin,
            updated_at = excluded.updated_at
        "#,
        table_name
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.display_name)
    .bind(&user.given_name)
    .bind(&user.family_name)
    .bind(&user.password_hash)
    .bind(user.is_admin)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    get_user_by_field_postgres(pool, &UserSearchField::Id(user.id.clone()))
        .await?
        .ok_or_else(|| UserError::Storage("Upserted account not found".to_string()))
}

pub(super) async fn delete_user_postgres(pool: &Pool<Postgres>, id: &str) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = $1
        "#,
        table_name
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
