use thiserror::Error;

/// Failures while creating or validating the snippets table
#[derive(Clone, Error, Debug, PartialEq)]
pub enum SnippetError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for SnippetError {
    fn from(err: sqlx::Error) -> Self {
        SnippetError::Storage(err.to_string())
    }
}
