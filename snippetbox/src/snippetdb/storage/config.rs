use std::{env, sync::LazyLock};

use crate::storage::DB_TABLE_PREFIX;

pub(super) static DB_TABLE_SNIPPETS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_SNIPPETS").unwrap_or_else(|_| format!("{}snippets", *DB_TABLE_PREFIX))
});
