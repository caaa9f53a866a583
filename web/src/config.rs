use std::net::SocketAddr;
use std::sync::LazyLock;

/// Plain HTTP listen address
pub(crate) static SNIPPETBOX_ADDR: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SNIPPETBOX_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string())
});

/// HTTPS listen address, used only when a certificate and key are configured
pub(crate) static SNIPPETBOX_TLS_ADDR: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SNIPPETBOX_TLS_ADDR").unwrap_or_else(|_| "0.0.0.0:4443".to_string())
});

pub(crate) struct TlsFiles {
    pub(crate) cert: String,
    pub(crate) key: String,
}

/// Certificate and key paths; `None` unless both are set and non-empty.
pub(crate) fn tls_files() -> Option<TlsFiles> {
    tls_files_from(
        std::env::var("TLS_CERT_FILE").ok(),
        std::env::var("TLS_KEY_FILE").ok(),
    )
}

fn tls_files_from(cert: Option<String>, key: Option<String>) -> Option<TlsFiles> {
    match (cert, key) {
        (Some(cert), Some(key)) if !cert.is_empty() && !key.is_empty() => {
            Some(TlsFiles { cert, key })
        }
        _ => None,
    }
}

pub(crate) fn parse_addr(name: &str, value: &str) -> Result<SocketAddr, String> {
    value
        .parse()
        .map_err(|e| format!("Invalid {name} '{value}': {e}"))
}
