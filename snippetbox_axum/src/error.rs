use axum::response::{IntoResponse, Response};
use http::{StatusCode, header::ALLOW};
use snippetbox::SessionError;

/// Log `err` and produce the generic 500 the client sees.
pub(crate) fn server_error(err: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("{}", err);
    client_error(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Status with its canonical reason phrase as the body
pub(crate) fn client_error(status: StatusCode) -> (StatusCode, String) {
    (
        status,
        status.canonical_reason().unwrap_or_default().to_string(),
    )
}

pub(crate) fn not_found() -> (StatusCode, String) {
    client_error(StatusCode::NOT_FOUND)
}

/// Router fallback for unmatched paths
pub(crate) async fn not_found_handler() -> (StatusCode, String) {
    not_found()
}

/// Method fallback for POST-only routes
pub(crate) async fn method_not_allowed() -> Response {
    let (status, body) = client_error(StatusCode::METHOD_NOT_ALLOWED);
    (status, [(ALLOW, "POST")], body).into_response()
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(server_error)
    }
}
