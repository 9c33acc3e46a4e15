//! Repository group source port
//!
//! Read-only view of the repository/group configuration store.

use reposeek_domain::RepositorySet;

/// Port for resolving named repository groups
pub trait RepositoryGroupSource: Send + Sync {
    /// Member repositories of `group`, or `None` if no such group exists
    fn group_repositories(&self, group: &str) -> Option<RepositorySet>;

    /// All configured group names
    fn group_names(&self) -> Vec<String>;
}
