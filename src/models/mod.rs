//! Core data models for the photo relay.
//!
//! Everything here is request-scoped: files pulled from one multipart body
//! and the stored references produced for that batch. They serialize
//! naturally as JSON via `serde`.

pub mod photo;
