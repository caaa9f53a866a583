//! Shared setup for tests that touch the global stores

use std::sync::Once;

use axum::response::Response;
use http::header::{COOKIE, HeaderMap, SET_COOKIE};

/// Load `.env_test` once and make sure the stores are initialized.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if let Ok(url) = std::env::var("GENERIC_DATA_STORE_URL") {
            if let Some(path) = url.strip_prefix("sqlite:") {
                let _ = std::fs::remove_file(path);
            }
        }
    });

    if let Err(e) = snippetbox::init().await {
        eprintln!("Warning: Failed to initialize stores: {e}");
    }
}

static EMAIL_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// An email address no other test in this run uses
pub(crate) fn unique_email(tag: &str) -> String {
    let n = EMAIL_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    let run = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{tag}-{run}-{n}@example.com")
}

/// Turn the `Set-Cookie` of a response into the `Cookie` of the next request.
pub(crate) fn follow_cookie(response_headers: &HeaderMap) -> HeaderMap {
    let set_cookie = response_headers
        .get(SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    let pair = set_cookie.split(';').next().unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, pair.parse().unwrap());
    headers
}

pub(crate) async fn body_string(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
