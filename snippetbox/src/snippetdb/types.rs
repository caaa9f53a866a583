use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored text snippet, shaped after the snippets table.
///
/// The snippet model has no query operations yet: the table is created and
/// validated at startup, and the snippet pages only echo their input.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}
