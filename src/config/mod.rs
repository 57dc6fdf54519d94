//! Configuration module
//!
//! - Data directory resolution
//! - User settings persistence (backend choice, display preferences)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{Settings, StorageBackend};
