//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types on demand.

mod picker;
mod search;

pub use picker::FilePickerConfig;
pub use search::FileSearchConfig;

use reposeek_application::SearchParams;
use reposeek_domain::RepositorySet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("search.{field} cannot be 0")]
    ZeroTimeout { field: &'static str },

    #[error("search.max_count cannot be 0")]
    ZeroMaxCount,

    #[error("repository '{alias}' must be an absolute path, got '{}'", .path.display())]
    RelativeRepositoryPath { alias: String, path: PathBuf },

    #[error("group '{group}' names unknown repository '{alias}'")]
    UnknownGroupMember { group: String, alias: String },

    #[error("picker.command cannot be empty")]
    EmptyPickerCommand,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Repository alias → path (`~/` is expanded)
    pub repositories: BTreeMap<String, PathBuf>,
    /// Group name → member aliases
    pub groups: BTreeMap<String, Vec<String>>,
    /// Deadlines and limits
    pub search: FileSearchConfig,
    /// Interactive picker settings
    pub picker: FilePickerConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        for (field, secs) in [
            ("file_timeout_secs", self.search.file_timeout_secs),
            ("content_timeout_secs", self.search.content_timeout_secs),
            ("fallback_timeout_secs", self.search.fallback_timeout_secs),
        ] {
            if secs == 0 {
                issues.push(ConfigValidationError::ZeroTimeout { field });
            }
        }

        if self.search.max_count == 0 {
            issues.push(ConfigValidationError::ZeroMaxCount);
        }

        for (alias, path) in &self.repositories {
            if !expand_home(path).is_absolute() {
                issues.push(ConfigValidationError::RelativeRepositoryPath {
                    alias: alias.clone(),
                    path: path.clone(),
                });
            }
        }

        for (group, members) in &self.groups {
            for alias in members {
                if !self.repositories.contains_key(alias) {
                    issues.push(ConfigValidationError::UnknownGroupMember {
                        group: group.clone(),
                        alias: alias.clone(),
                    });
                }
            }
        }

        if self.picker.command.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyPickerCommand);
        }

        issues
    }

    /// All configured repositories
    pub fn repository_set(&self) -> RepositorySet {
        self.repositories
            .iter()
            .map(|(alias, path)| (alias.clone(), expand_home(path)))
            .collect()
    }

    /// Members of `group`, or `None` if the group is not configured.
    ///
    /// Aliases without a configured repository are skipped.
    pub fn group_repositories(&self, group: &str) -> Option<RepositorySet> {
        let members = self.groups.get(group)?;
        Some(
            members
                .iter()
                .filter_map(|alias| {
                    self.repositories
                        .get(alias)
                        .map(|path| (alias.clone(), expand_home(path)))
                })
                .collect(),
        )
    }

    /// Application search parameters
    pub fn search_params(&self) -> SearchParams {
        SearchParams::default()
            .with_file_timeout(Duration::from_secs(self.search.file_timeout_secs))
            .with_content_timeout(Duration::from_secs(self.search.content_timeout_secs))
            .with_fallback_timeout(Duration::from_secs(self.search.fallback_timeout_secs))
            .with_max_count(self.search.max_count)
            .with_basic_limit(self.picker.basic_limit)
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
