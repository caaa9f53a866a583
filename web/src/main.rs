mod config;
mod server;

use config::{SNIPPETBOX_ADDR, SNIPPETBOX_TLS_ADDR, parse_addr, tls_files};
use server::{init_tracing, spawn_http_server, spawn_https_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install default CryptoProvider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install default CryptoProvider")?;

    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    snippetbox_axum::init().await?;

    let app = snippetbox_axum::snippetbox_router();

    let http_addr = parse_addr("SNIPPETBOX_ADDR", &SNIPPETBOX_ADDR)?;
    let http_server = spawn_http_server(http_addr, app.clone());

    match tls_files() {
        Some(tls) => {
            let https_addr = parse_addr("SNIPPETBOX_TLS_ADDR", &SNIPPETBOX_TLS_ADDR)?;
            let https_server = spawn_https_server(https_addr, tls, app).await?;
            let (http, https) = tokio::try_join!(http_server, https_server)?;
            http?;
            https?;
        }
        None => http_server.await??,
    }

    Ok(())
}
