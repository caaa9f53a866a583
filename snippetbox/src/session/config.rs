use std::{env, sync::LazyLock};

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "snippetbox_session".to_string())
});

/// Session lifetime in seconds
pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> =
    LazyLock::new(|| parse_max_age(env::var("SESSION_COOKIE_MAX_AGE").ok().as_deref()));

/// Whether the session cookie carries the `Secure` attribute
pub(crate) static SESSION_COOKIE_SECURE: LazyLock<bool> =
    LazyLock::new(|| parse_secure(env::var("SESSION_COOKIE_SECURE").ok().as_deref()));

// 12 hours
const DEFAULT_MAX_AGE: u64 = 43200;

// 400 days, the longest Max-Age browsers honour
const MAX_MAX_AGE: u64 = 400 * 24 * 60 * 60;

fn parse_max_age(value: Option<&str>) -> u64 {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
        .map(|n| n.min(MAX_MAX_AGE))
        .unwrap_or(DEFAULT_MAX_AGE)
}

fn parse_secure(value: Option<&str>) -> bool {
    !matches!(
        value.map(|s| s.trim().to_ascii_lowercase()).as_deref(),
        Some("false" | "0" | "no")
    )
}
