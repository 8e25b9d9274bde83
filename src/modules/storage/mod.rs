//! Storage module for uploaded hazard files.
//!
//! Provides a local-disk upload store with collision-safe file naming.

mod upload_store;

pub use upload_store::UploadStore;
