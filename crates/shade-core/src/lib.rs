//! Shade Core Library
//!
//! This crate provides the domain models, error types, configuration and the
//! path/part arithmetic shared by the Shade API client and the workflow node.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod multipart;
pub mod paths;

// Re-export commonly used types
pub use config::ShadeConfig;
pub use error::{ErrorMetadata, LogLevel, ShadeError, ShadeResult};
pub use multipart::{plan_parts, total_parts, PartRange};
pub use paths::{join_folder_path, normalize_upload_path, strip_drive_prefix};
