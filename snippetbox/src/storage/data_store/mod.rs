mod config;
mod types;

pub(crate) use config::{DB_TABLE_PREFIX, GENERIC_DATA_STORE};
pub(crate) use types::DataStore;
