//! Infrastructure layer for reposeek
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod picker;
pub mod preview;
pub mod search;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigGroupSource, ConfigLoader, ConfigValidationError, FileConfig, FilePickerConfig,
    FileSearchConfig,
};
pub use picker::FzfSelector;
pub use preview::TextPreviewProvider;
pub use search::{FdFileSearcher, RgContentSearcher, WalkContentSearcher, WalkFileSearcher};
pub use tools::{SystemToolProbe, ToolRegistry};
