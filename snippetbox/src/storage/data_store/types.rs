use sqlx::{PgPool, SqlitePool};

/// Connection pool to the backing relational store.
///
/// Pools are internally reference counted and safe to share, so the store is
/// read concurrently by every request without further locking.
#[derive(Clone, Debug)]
pub(crate) enum DataStore {
    Sqlite(SqlitePool),
    Postgres(PgPool),
}

impl DataStore {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }
}
