//! Repository filtering errors

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-level filtering errors. Always fatal to the call that hit them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Group '{group}' does not exist or has no repositories")]
    EmptyOrMissingGroup { group: String },

    #[error("Repository '{alias}' in group '{group}' does not match: group has {}, search set has {}", .expected.display(), display_actual(.actual))]
    GroupRepositoryMismatch {
        group: String,
        alias: String,
        /// Path according to the group configuration
        expected: PathBuf,
        /// Path in the caller's repository set (`None` when absent)
        actual: Option<PathBuf>,
    },
}

fn display_actual(actual: &Option<PathBuf>) -> String {
    actual
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<missing>".to_string())
}

impl FilterError {
    pub fn is_empty_group(&self) -> bool {
        matches!(self, FilterError::EmptyOrMissingGroup { .. })
    }
}
