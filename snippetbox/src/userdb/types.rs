use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Database-assigned identifier
    pub id: i64,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// bcrypt hash; never serialized
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// When the account was created (UTC)
    pub created: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub(super) struct StoredCredentials {
    pub(super) id: i64,
    pub(super) hashed_password: String,
}
