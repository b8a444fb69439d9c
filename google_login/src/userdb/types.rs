use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A local customer account, created or matched during Google sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Database-assigned sequence number (primary key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,
    /// Unique account identifier
    pub id: String,
    /// Login identifier and contact address; unique across the directory
    pub email: String,
    /// Name shown in the storefront header
    pub display_name: String,
    pub given_name: String,
    pub family_name: String,
    /// Digest of the generated password; never used for interactive login
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Whether the account may edit store settings
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account record, not yet stored
    pub fn new(
        id: String,
        email: String,
        display_name: String,
        given_name: String,
        family_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            sequence_number: None,
            id,
            email,
            display_name,
            given_name,
            family_name,
            password_hash,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the account may administer the store
    ///
    /// This is determined by either:
    /// 1. The account has the is_admin flag set, or
    /// 2. The account is the first in the directory (sequence_number = 1)
    pub fn has_admin_privileges(&self) -> bool {
        self.is_admin || self.sequence_number == Some(1)
    }
}

/// Search field options for account lookup
#[derive(Debug)]
pub(crate) enum UserSearchField {
    /// Search by ID
    Id(String),
    /// Search by email
    Email(String),
}

impl std::fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserSearchField::Id(id) => write!(f, "id={id}"),
            UserSearchField::Email(email) => write!(f, "email={email}"),
        }
    }
}
