//! Repository filter
//!
//! Narrows a caller-supplied [`RepositorySet`] to the members of a named
//! group.
//!
//! # Entry points
//!
//! | Method | Empty/missing group | Extra checks |
//! |--------|---------------------|--------------|
//! | [`filter_by_group`](RepositoryFilter::filter_by_group) | `EmptyOrMissingGroup` | none |
//! | [`filter_by_group_with_validation`](RepositoryFilter::filter_by_group_with_validation) | `EmptyOrMissingGroup` | every member must be in the caller's set with the same path |
//! | [`filter_with_info`](RepositoryFilter::filter_with_info) | `EmptyOrMissingGroup` | also reports before/after counts |
//! | [`filter_by_group_lenient`](RepositoryFilter::filter_by_group_lenient) | empty set | none |
//!
//! An empty group name is the identity: the input set is returned unchanged.

use crate::ports::group_source::RepositoryGroupSource;
use reposeek_domain::{FilterError, GroupFilterOutcome, RepositorySet};
use std::sync::Arc;
use tracing::debug;

/// Narrows repository sets by group
#[derive(Clone)]
pub struct RepositoryFilter {
    source: Arc<dyn RepositoryGroupSource>,
}

impl RepositoryFilter {
    pub fn new(source: Arc<dyn RepositoryGroupSource>) -> Self {
        Self { source }
    }

    /// Configured group names
    pub fn group_names(&self) -> Vec<String> {
        self.source.group_names()
    }

    /// Return exactly the repositories of `group`.
    ///
    /// A group that does not exist or has no members is an error, never an
    /// empty success.
    pub fn filter_by_group(
        &self,
        repos: &RepositorySet,
        group: &str,
    ) -> Result<RepositorySet, FilterError> {
        if group.is_empty() {
            return Ok(repos.clone());
        }

        match self.source.group_repositories(group) {
            Some(members) if !members.is_empty() => {
                debug!(group, members = members.len(), "Resolved repository group");
                Ok(members)
            }
            _ => Err(FilterError::EmptyOrMissingGroup {
                group: group.to_string(),
            }),
        }
    }

    /// Like [`filter_by_group`](Self::filter_by_group), and additionally
    /// require every member to appear in `repos` with an identical path.
    pub fn filter_by_group_with_validation(
        &self,
        repos: &RepositorySet,
        group: &str,
    ) -> Result<RepositorySet, FilterError> {
        let members = self.filter_by_group(repos, group)?;

        for (alias, expected) in members.iter() {
            match repos.get(alias) {
                Some(actual) if actual == expected => {}
                actual => {
                    return Err(FilterError::GroupRepositoryMismatch {
                        group: group.to_string(),
                        alias: alias.to_string(),
                        expected: expected.to_path_buf(),
                        actual: actual.map(|p| p.to_path_buf()),
                    });
                }
            }
        }

        Ok(members)
    }

    /// [`filter_by_group`](Self::filter_by_group) plus before/after counts
    pub fn filter_with_info(
        &self,
        repos: &RepositorySet,
        group: &str,
    ) -> Result<(RepositorySet, GroupFilterOutcome), FilterError> {
        let filtered = self.filter_by_group(repos, group)?;
        let outcome = GroupFilterOutcome {
            original_count: repos.len(),
            filtered_count: filtered.len(),
            group: group.to_string(),
            applied: !group.is_empty(),
        };
        Ok((filtered, outcome))
    }

    /// Apply an optional group, as searchers receive it
    pub fn resolve(
        &self,
        repos: &RepositorySet,
        group: Option<&str>,
    ) -> Result<RepositorySet, FilterError> {
        match group {
            Some(group) => self.filter_by_group(repos, group),
            None => Ok(repos.clone()),
        }
    }

    /// Treat an empty or missing group as an empty set instead of an error.
    ///
    /// Only for listing; searches use the strict path.
    pub fn filter_by_group_lenient(&self, repos: &RepositorySet, group: &str) -> RepositorySet {
        match self.filter_by_group(repos, group) {
            Ok(filtered) => filtered,
            Err(e) => {
                debug!(group, error = %e, "Group resolved to an empty set");
                RepositorySet::new()
            }
        }
    }
}
