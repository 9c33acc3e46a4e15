//! Preview requests
//!
//! Preview rendering belongs to an external collaborator. The only
//! obligation of the search core is to turn a chosen result into a
//! correct, structured [`PreviewRequest`].

use crate::search::SearchResult;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// What to preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PreviewRequest {
    /// A file, optionally centred on a line
    File { path: PathBuf, line: Option<u32> },
    /// A commit inside a repository
    Commit { repository_path: PathBuf, hash: String },
}

impl PreviewRequest {
    /// Build the file preview request for a chosen result
    pub fn for_result(result: &SearchResult) -> Self {
        PreviewRequest::File {
            path: result.absolute_path().to_path_buf(),
            line: result.line_number(),
        }
    }

    pub fn commit(repository_path: impl Into<PathBuf>, hash: impl Into<String>) -> Self {
        PreviewRequest::Commit {
            repository_path: repository_path.into(),
            hash: hash.into(),
        }
    }
}

/// Preview rendering failures
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("Cannot preview {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Commit preview failed: {0}")]
    CommitFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{ContentResult, FileResult};

    #[test]
    fn test_request_for_file_result() {
        let result: SearchResult = FileResult::new("a", "x.txt", "/r/a/x.txt").into();
        assert_eq!(
            PreviewRequest::for_result(&result),
            PreviewRequest::File {
                path: PathBuf::from("/r/a/x.txt"),
                line: None
            }
        );
    }

    #[test]
    fn test_request_for_content_result_keeps_line() {
        let result: SearchResult =
            ContentResult::new("a", "x.rs", "/r/a/x.rs", 42, 1, "fn main() {}").into();
        assert_eq!(
            PreviewRequest::for_result(&result),
            PreviewRequest::File {
                path: PathBuf::from("/r/a/x.rs"),
                line: Some(42)
            }
        );
    }
}
