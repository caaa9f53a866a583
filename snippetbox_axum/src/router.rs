//! Route table for the Snippetbox pages

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::{method_not_allowed, not_found_handler};
use crate::pages::{
    create_snippet, home, login, login_form, logout, show_snippet, signup, signup_form,
};

/// Create the application router with HTTP request tracing
///
/// Routes:
/// - `GET /` home page
/// - `GET /snippet?id=N` show a snippet
/// - `POST /snippet/create` create a snippet (other methods get 405 with `Allow: POST`)
/// - `GET|POST /user/signup`, `GET|POST /user/login`, `POST /user/logout`
///
/// Any other path is a 404.
pub fn snippetbox_router() -> Router {
    snippetbox_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same routes as [`snippetbox_router`] without the tracing middleware
pub fn snippetbox_router_no_trace() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/snippet", get(show_snippet))
        .route(
            "/snippet/create",
            post(create_snippet).fallback(method_not_allowed),
        )
        .route("/user/signup", get(signup_form).post(signup))
        .route("/user/login", get(login_form).post(login))
        .route("/user/logout", post(logout))
        .fallback(not_found_handler)
}
