//! Defines routes for the photo relay API.
//!
//! ## Structure
//! - `POST /api/photos` - upload a batch of photos
//! - `GET  /healthz`    - liveness probe
//!
//! The default request body limit is disabled on this surface: upload size
//! is deliberately not validated.

use crate::{
    handlers::{health_handlers::healthz, photo_handlers::upload_photos},
    services::upload_service::UploadService,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Build and return the router for all relay routes.
///
/// The router carries shared state (`UploadService`) to all handlers.
pub fn routes() -> Router<UploadService> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/photos", post(upload_photos))
        .layer(DefaultBodyLimit::disable())
}
