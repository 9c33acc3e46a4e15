//! Picker configuration from TOML (`[picker]` section)

use serde::{Deserialize, Serialize};

/// Raw picker configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePickerConfig {
    /// fzf-compatible picker binary
    pub command: String,
    /// Value passed to `--height`
    pub height: String,
    /// Results listed by the numbered prompt
    pub basic_limit: usize,
}

impl Default for FilePickerConfig {
    fn default() -> Self {
        Self {
            command: "fzf".to_string(),
            height: "40%".to_string(),
            basic_limit: 20,
        }
    }
}
