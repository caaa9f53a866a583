//! Shared setup for tests that touch the global stores

use std::sync::Once;

use crate::utils::gen_random_string;

/// Load `.env_test` and make sure the tables exist.
///
/// The environment is loaded, and any SQLite file left by a previous run is
/// removed, exactly once per test binary. Table creation is idempotent and
/// runs on every call because each `#[tokio::test]` has its own runtime.
pub(crate) async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        if let Some(db_path) = extract_sqlite_file_path() {
            // a missing file is fine
            let _ = std::fs::remove_file(&db_path);
        }
    });

    if let Err(e) = crate::init().await {
        eprintln!("Warning: Failed to initialize stores: {e}");
    }
}

/// An email address no other test uses
pub(crate) fn unique_email(tag: &str) -> String {
    let suffix = gen_random_string(8)
        .expect("random suffix")
        .to_ascii_lowercase()
        .replace(['-', '_'], "x");
    format!("{tag}-{suffix}@example.com")
}

/// File path of a SQLite URL, or `None` for other stores and in-memory databases
fn extract_sqlite_file_path_from_url(url: &str) -> Option<String> {
    let path = url.strip_prefix("sqlite:")?;
    let path = path.strip_prefix("file:").unwrap_or(path);
    let path = path.strip_prefix("//").unwrap_or(path);
    let path = path.split('?').next()?;

    if path.is_empty() || path.contains(":memory:") {
        return None;
    }
    Some(path.to_string())
}

fn extract_sqlite_file_path() -> Option<String> {
    std::env::var("GENERIC_DATA_STORE_URL")
        .ok()
        .and_then(|url| extract_sqlite_file_path_from_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_sqlite_file_path_from_url() {
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:/tmp/test.db"),
            Some("/tmp/test.db".to_string())
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:./test.db"),
            Some("./test.db".to_string())
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:file:/tmp/test.db?mode=rwc"),
            Some("/tmp/test.db".to_string())
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:///tmp/test.db"),
            Some("/tmp/test.db".to_string())
        );
    }

    #[test]
    fn test_extract_non_file_urls() {
        assert_eq!(extract_sqlite_file_path_from_url("sqlite::memory:"), None);
        assert_eq!(
            extract_sqlite_file_path_from_url("sqlite:file::memory:?cache=shared"),
            None
        );
        assert_eq!(
            extract_sqlite_file_path_from_url("postgresql://localhost/db"),
            None
        );
    }

    #[test]
    fn test_unique_email_shape() {
        let a = unique_email("t");
        let b = unique_email("t");
        assert_ne!(a, b);
        assert!(a.starts_with("t-") && a.ends_with("@example.com"));
    }
}
