use anyhow::{Context, Result};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub blob_base_url: String,
    pub blob_token: Option<String>,
    pub companion_url: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Photo upload relay API")]
pub struct Args {
    /// Host to bind to (overrides PHOTO_RELAY_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides PHOTO_RELAY_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL of the blob storage service (overrides PHOTO_RELAY_BLOB_URL)
    #[arg(long)]
    pub blob_url: Option<String>,

    /// Bearer token for the blob storage service (overrides PHOTO_RELAY_BLOB_TOKEN)
    #[arg(long)]
    pub blob_token: Option<String>,

    /// Companion endpoint receiving stored-photo references
    /// (overrides PHOTO_RELAY_COMPANION_URL)
    #[arg(long)]
    pub companion_url: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        // Parse CLI once
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("PHOTO_RELAY_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("PHOTO_RELAY_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing PHOTO_RELAY_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading PHOTO_RELAY_PORT"),
        };
        let env_blob_url = env::var("PHOTO_RELAY_BLOB_URL")
            .unwrap_or_else(|_| "https://blob.vercel-storage.com".into());
        let env_blob_token = env::var("PHOTO_RELAY_BLOB_TOKEN").ok();
        let env_companion = env::var("PHOTO_RELAY_COMPANION_URL")
            .unwrap_or_else(|_| "http://localhost:27123/addImages".into());

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            blob_base_url: args.blob_url.unwrap_or(env_blob_url),
            blob_token: args.blob_token.or(env_blob_token),
            companion_url: args.companion_url.unwrap_or(env_companion),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
