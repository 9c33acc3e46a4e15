//! Search error types

use super::entities::SearchResult;
use crate::repository::FilterError;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while running a search.
///
/// Per-repository failures (`ToolExecutionFailed`, `MalformedOutput`) are
/// absorbed by the fan-out and only logged. The remaining variants reach
/// the caller.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Tool not available: {tool}")]
    ToolUnavailable { tool: String },

    #[error("{tool} failed in repository '{repository}' (exit code {code}): {message}", code = display_code(.exit_code))]
    ToolExecutionFailed {
        tool: String,
        repository: String,
        exit_code: Option<i32>,
        message: String,
    },

    #[error("Malformed {tool} output: {line}")]
    MalformedOutput { tool: String, line: String },

    #[error("Search timed out after {}s ({} partial results)", .timeout.as_secs(), .partial.len())]
    TimedOut {
        timeout: Duration,
        partial: Vec<SearchResult>,
    },

    #[error("Search pattern cannot be empty")]
    EmptyPattern,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Primary search failed ({primary}); fallback search failed ({fallback})")]
    AllStrategiesFailed {
        primary: Box<SearchError>,
        fallback: Box<SearchError>,
    },

    #[error("I/O error: {0}")]
    Io(String),
}

impl SearchError {
    pub fn tool_unavailable(tool: impl Into<String>) -> Self {
        SearchError::ToolUnavailable { tool: tool.into() }
    }

    /// Check if this error is a timeout, or wraps one from either strategy
    pub fn is_timeout(&self) -> bool {
        match self {
            SearchError::TimedOut { .. } => true,
            SearchError::AllStrategiesFailed { primary, fallback } => {
                primary.is_timeout() || fallback.is_timeout()
            }
            _ => false,
        }
    }

    /// Results gathered before the error, if any.
    ///
    /// When both strategies failed, the fallback's partial results win
    /// unless it has none.
    pub fn partial_results(&self) -> &[SearchResult] {
        match self {
            SearchError::TimedOut { partial, .. } => partial,
            SearchError::AllStrategiesFailed { primary, fallback } => {
                match fallback.partial_results() {
                    [] => primary.partial_results(),
                    partial => partial,
                }
            }
            _ => &[],
        }
    }

    /// Consume the error and keep whatever results it carries
    pub fn into_partial_results(self) -> Vec<SearchResult> {
        match self {
            SearchError::TimedOut { partial, .. } => partial,
            SearchError::AllStrategiesFailed { primary, fallback } => {
                let partial = fallback.into_partial_results();
                if partial.is_empty() {
                    primary.into_partial_results()
                } else {
                    partial
                }
            }
            _ => Vec::new(),
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string())
        .unwrap_or_else(|| "none".to_string())
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        SearchError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::entities::FileResult;

    #[test]
    fn test_timed_out_keeps_partial_results() {
        let err = SearchError::TimedOut {
            timeout: Duration::from_secs(10),
            partial: vec![FileResult::new("a", "x", "/r/a/x").into()],
        };
        assert!(err.is_timeout());
        assert_eq!(err.partial_results().len(), 1);
        assert!(err.to_string().contains("1 partial results"));
        assert_eq!(err.into_partial_results().len(), 1);
    }

    #[test]
    fn test_both_strategies_timing_out_keep_partial_results() {
        let timed_out = |alias: &str| SearchError::TimedOut {
            timeout: Duration::from_secs(10),
            partial: vec![FileResult::new(alias, "x", format!("/r/{alias}/x")).into()],
        };

        let err = SearchError::AllStrategiesFailed {
            primary: Box::new(timed_out("primary")),
            fallback: Box::new(timed_out("fallback")),
        };
        assert!(err.is_timeout());
        assert_eq!(err.partial_results()[0].repository(), "fallback");
        assert_eq!(err.into_partial_results().len(), 1);

        let err = SearchError::AllStrategiesFailed {
            primary: Box::new(timed_out("primary")),
            fallback: Box::new(SearchError::Io("denied".to_string())),
        };
        assert!(err.is_timeout());
        assert_eq!(err.into_partial_results()[0].repository(), "primary");

        let err = SearchError::AllStrategiesFailed {
            primary: Box::new(SearchError::tool_unavailable("fd")),
            fallback: Box::new(SearchError::Io("denied".to_string())),
        };
        assert!(!err.is_timeout());
        assert!(err.into_partial_results().is_empty());
    }

    #[test]
    fn test_execution_failed_display() {
        let err = SearchError::ToolExecutionFailed {
            tool: "rg".to_string(),
            repository: "api".to_string(),
            exit_code: Some(2),
            message: "bad regex".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "rg failed in repository 'api' (exit code 2): bad regex"
        );
        assert!(err.partial_results().is_empty());
    }

    #[test]
    fn test_all_strategies_failed_names_both_causes() {
        let err = SearchError::AllStrategiesFailed {
            primary: Box::new(SearchError::tool_unavailable("fd")),
            fallback: Box::new(SearchError::Io("denied".to_string())),
        };
        let msg = err.to_string();
        assert!(msg.contains("fd"));
        assert!(msg.contains("denied"));
    }
}
