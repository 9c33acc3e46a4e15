//! Search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Deadline for a file search across all repositories
    pub file_timeout_secs: u64,
    /// Deadline for a content search across all repositories
    pub content_timeout_secs: u64,
    /// Deadline for the built-in walk
    pub fallback_timeout_secs: u64,
    /// Maximum matches per file
    pub max_count: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            file_timeout_secs: 10,
            content_timeout_secs: 15,
            fallback_timeout_secs: 30,
            max_count: 50,
        }
    }
}
