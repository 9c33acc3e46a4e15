//! Searcher port
//!
//! A searcher is one search strategy: a primary one backed by a fast
//! external binary, or a built-in fallback. Both variants expose the same
//! capability set so [`SmartSearcher`](crate::use_cases::smart_search::SmartSearcher)
//! never needs to know which one it holds.

use async_trait::async_trait;
use reposeek_domain::{
    RepositorySet, SearchError, SearchKind, SearchResult, format_for_picker,
    parse_picker_selection,
};

/// Port for a search strategy
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Short identifier used in logs (e.g., "fd", "walk")
    fn name(&self) -> &str;

    /// Whether this searcher finds files or lines
    fn kind(&self) -> SearchKind;

    /// Search every repository in `repos`, optionally narrowed to `group`.
    ///
    /// A timeout returns [`SearchError::TimedOut`] carrying the results
    /// gathered before the deadline.
    async fn search(
        &self,
        pattern: &str,
        repos: &RepositorySet,
        group: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Format results as the block fed to an interactive picker
    fn format_for_picker(&self, results: &[SearchResult]) -> String {
        format_for_picker(results)
    }

    /// Map a line echoed by the picker back to a result
    fn parse_picker_selection<'a>(
        &self,
        line: &str,
        results: &'a [SearchResult],
    ) -> Option<&'a SearchResult> {
        parse_picker_selection(line, results)
    }
}
