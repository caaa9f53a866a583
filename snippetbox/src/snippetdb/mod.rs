mod errors;
mod storage;
mod types;

pub use errors::SnippetError;
pub use storage::SnippetStore;
pub use types::Snippet;

pub(crate) async fn init() -> Result<(), SnippetError> {
    SnippetStore::init().await
}
