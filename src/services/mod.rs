//! Collaborator clients and the batch upload orchestration.

pub mod blob_store;
pub mod companion;
pub mod naming;
pub mod upload_service;
