//! Repository value objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from unique repository alias to absolute root path.
///
/// Supplied by the caller. The search core only ever reads or narrows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositorySet {
    repositories: BTreeMap<String, PathBuf>,
}

impl RepositorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(alias, path);
        self
    }

    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<PathBuf>) {
        self.repositories.insert(alias.into(), path.into());
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.repositories.get(alias).map(PathBuf::as_path)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.repositories.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.repositories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.repositories
            .iter()
            .map(|(alias, path)| (alias.as_str(), path.as_path()))
    }

    /// Merge another set into this one; entries in `other` win.
    pub fn extend(&mut self, other: RepositorySet) {
        self.repositories.extend(other.repositories);
    }
}

impl FromIterator<(String, PathBuf)> for RepositorySet {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            repositories: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, PathBuf>> for RepositorySet {
    fn from(repositories: BTreeMap<String, PathBuf>) -> Self {
        Self { repositories }
    }
}

impl IntoIterator for RepositorySet {
    type Item = (String, PathBuf);
    type IntoIter = std::collections::btree_map::IntoIter<String, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.repositories.into_iter()
    }
}

/// Observability record for one group filter application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupFilterOutcome {
    pub original_count: usize,
    pub filtered_count: usize,
    pub group: String,
    /// False when the group name was empty and the set passed through unchanged
    pub applied: bool,
}

impl GroupFilterOutcome {
    pub fn summary(&self) -> String {
        if self.applied {
            format!(
                "group '{}': {} of {} repositories",
                self.group, self.filtered_count, self.original_count
            )
        } else {
            format!("all {} repositories", self.original_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_set_basics() {
        let repos = RepositorySet::new()
            .with("b", "/r/b")
            .with("a", "/r/a");

        assert_eq!(repos.len(), 2);
        assert!(repos.contains("a"));
        assert_eq!(repos.get("b"), Some(Path::new("/r/b")));
        // Iteration is alias-ordered
        assert_eq!(repos.aliases().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_extend_overrides() {
        let mut repos = RepositorySet::new().with("a", "/old/a");
        repos.extend(RepositorySet::new().with("a", "/new/a").with("c", "/r/c"));
        assert_eq!(repos.get("a"), Some(Path::new("/new/a")));
        assert_eq!(repos.len(), 2);
    }

    #[test]
    fn test_outcome_summary() {
        let applied = GroupFilterOutcome {
            original_count: 3,
            filtered_count: 2,
            group: "backend".to_string(),
            applied: true,
        };
        assert_eq!(applied.summary(), "group 'backend': 2 of 3 repositories");

        let passthrough = GroupFilterOutcome {
            original_count: 3,
            filtered_count: 3,
            group: String::new(),
            applied: false,
        };
        assert_eq!(passthrough.summary(), "all 3 repositories");
    }
}
