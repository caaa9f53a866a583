mod errors;
mod password;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::UserStore;
pub use types::User;

pub(crate) async fn init() -> Result<(), UserError> {
    UserStore::init().await
}
