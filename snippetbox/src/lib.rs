//! snippetbox - models, sessions and form validation for the Snippetbox web application
//!
//! This crate holds everything below the HTTP layer: the user and snippet
//! models backed by SQLite or PostgreSQL, server-side sessions with flash
//! messages kept in the cache store, and the form validators used by the
//! signup and login pages.

mod config;
mod forms;
mod session;
mod snippetdb;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{DEFAULT_PASSWORD_HASH_COST, PASSWORD_HASH_COST};

pub use forms::{Form, FormErrors};

pub use session::{
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SessionError, get_authenticated_user_id,
    login_session, logout_session, pop_flash, put_flash,
};

pub use snippetdb::{Snippet, SnippetError, SnippetStore};
pub use userdb::{User, UserError, UserStore};
pub use utils::UtilError;

/// Initialize the data store tables and the session cache store
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    snippetdb::init().await?;
    tracing::info!("Stores initialized");
    Ok(())
}
