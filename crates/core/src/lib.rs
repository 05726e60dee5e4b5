//! Pageauth core types and utilities

pub mod config;
pub mod error;
pub mod storage;

pub use config::{AuthConfig, FrontendConfig};
pub use error::{CoreError, CoreResult};
pub use storage::{MemoryBackend, StorageBackend, TokenStorage, bearer_header_value};
