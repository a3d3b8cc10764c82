//! Photo upload relay.
//!
//! Accepts batches of photos as `multipart/form-data`, persists every file to
//! an external blob-storage service, and forwards the resulting public URLs
//! to a locally running companion application. A batch is all-or-nothing:
//! one failed store or a failed forward fails the whole request.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
