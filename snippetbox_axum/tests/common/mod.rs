#![allow(dead_code)]

use std::sync::Once;

use reqwest::{Client, redirect::Policy};
use tokio::net::TcpListener;

pub fn init_env() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// Serve the router on an ephemeral port of the current runtime and return
/// its base URL.
pub async fn spawn_app() -> String {
    init_env();
    snippetbox_axum::init()
        .await
        .expect("store initialization");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, snippetbox_axum::snippetbox_router_no_trace())
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

/// HTTP client that reports redirects instead of following them
pub fn client() -> Client {
    Client::builder().redirect(Policy::none()).build().unwrap()
}

/// `name=value` of the response's `Set-Cookie`, ready for a `Cookie` header
pub fn session_cookie(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

pub fn unique_email(tag: &str) -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let run = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{tag}-{run}-{n}@example.com")
}
