//! Configuration file loading for reposeek
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `REPOSEEK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./reposeek.toml` or `./.reposeek.toml`
//! 4. Global: `$XDG_CONFIG_HOME/reposeek/config.toml`
//! 5. Default values

mod file_config;
mod group_source;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FilePickerConfig, FileSearchConfig};
pub use group_source::ConfigGroupSource;
pub use loader::ConfigLoader;
