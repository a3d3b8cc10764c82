use anyhow::Result;
use axum::Router;
use std::{io::ErrorKind, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use photo_relay::{
    config,
    routes,
    services::{
        blob_store::{BlobStore, HttpBlobStore},
        companion::CompanionClient,
        naming::{FileNamer, TimestampNamer},
        upload_service::UploadService,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config ---
    let cfg = config::AppConfig::from_env_and_args()?;

    tracing::info!(
        "Starting photo-relay on {} (blob store: {}, companion: {})",
        cfg.addr(),
        cfg.blob_base_url,
        cfg.companion_url
    );

    // --- Shared outbound HTTP client ---
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .user_agent(concat!("photo-relay/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // --- Initialize core service ---
    let store: Arc<dyn BlobStore> = Arc::new(HttpBlobStore::new(
        client.clone(),
        cfg.blob_base_url.clone(),
        cfg.blob_token.clone(),
    ));
    let namer: Arc<dyn FileNamer> = Arc::new(TimestampNamer::new());
    let companion = CompanionClient::new(client, cfg.companion_url.clone());
    let service = UploadService::new(store, namer, companion);

    // --- Build router ---
    let app: Router = routes::routes::routes().with_state(service);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
