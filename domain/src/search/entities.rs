//! Search result entities
//!
//! Results are immutable once built. Each one carries a precomputed
//! display text that doubles as the round-trip key for picker selection
//! (see [`crate::selection::protocol`]).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file matched by a file search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    /// Alias of the repository the file belongs to
    pub repository: String,
    /// Path relative to the repository root (or absolute when outside it)
    pub relative_path: String,
    /// Absolute filesystem path
    pub absolute_path: PathBuf,
    display: String,
}

impl FileResult {
    pub fn new(
        repository: impl Into<String>,
        relative_path: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
    ) -> Self {
        let repository = repository.into();
        let relative_path = relative_path.into();
        let display = format!("{}:{}", repository, relative_path);
        Self {
            repository,
            relative_path,
            absolute_path: absolute_path.into(),
            display,
        }
    }

    /// `alias:relpath`
    pub fn display_text(&self) -> &str {
        &self.display
    }
}

/// A single matching line produced by a content search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResult {
    /// Alias of the repository the file belongs to
    pub repository: String,
    /// Path relative to the repository root (or verbatim when outside it)
    pub relative_path: String,
    /// Absolute filesystem path
    pub absolute_path: PathBuf,
    /// 1-based line number
    pub line_number: u32,
    /// 1-based column of the first match
    pub column: u32,
    /// Raw text of the matched line
    pub content: String,
    display: String,
}

impl ContentResult {
    pub fn new(
        repository: impl Into<String>,
        relative_path: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        line_number: u32,
        column: u32,
        content: impl Into<String>,
    ) -> Self {
        let repository = repository.into();
        let relative_path = relative_path.into();
        let content = content.into();
        let display = format!(
            "{}:{}:{}: {}",
            repository,
            relative_path,
            line_number,
            content.trim()
        );
        Self {
            repository,
            relative_path,
            absolute_path: absolute_path.into(),
            line_number,
            column,
            content,
            display,
        }
    }

    /// `alias:relpath:line: content`
    pub fn display_text(&self) -> &str {
        &self.display
    }
}

/// Any result a searcher can produce.
///
/// Selectors and the picker protocol work on this type so the same
/// code path handles file and content searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SearchResult {
    File(FileResult),
    Content(ContentResult),
}

impl SearchResult {
    pub fn display_text(&self) -> &str {
        match self {
            SearchResult::File(r) => r.display_text(),
            SearchResult::Content(r) => r.display_text(),
        }
    }

    pub fn repository(&self) -> &str {
        match self {
            SearchResult::File(r) => &r.repository,
            SearchResult::Content(r) => &r.repository,
        }
    }

    pub fn relative_path(&self) -> &str {
        match self {
            SearchResult::File(r) => &r.relative_path,
            SearchResult::Content(r) => &r.relative_path,
        }
    }

    pub fn absolute_path(&self) -> &Path {
        match self {
            SearchResult::File(r) => &r.absolute_path,
            SearchResult::Content(r) => &r.absolute_path,
        }
    }

    /// Line number of the match, or `None` for pure file results
    pub fn line_number(&self) -> Option<u32> {
        match self {
            SearchResult::File(_) => None,
            SearchResult::Content(r) => Some(r.line_number),
        }
    }
}

impl From<FileResult> for SearchResult {
    fn from(result: FileResult) -> Self {
        SearchResult::File(result)
    }
}

impl From<ContentResult> for SearchResult {
    fn from(result: ContentResult) -> Self {
        SearchResult::Content(result)
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Which kind of search a searcher performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    File,
    Content,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::File => "file",
            SearchKind::Content => "content",
        }
    }
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_result_display() {
        let result = FileResult::new("api", "src/main.rs", "/r/api/src/main.rs");
        assert_eq!(result.display_text(), "api:src/main.rs");
    }

    #[test]
    fn test_content_result_display_trims_content() {
        let result = ContentResult::new("api", "src/lib.rs", "/r/api/src/lib.rs", 12, 5, "    fn run() {");
        assert_eq!(result.display_text(), "api:src/lib.rs:12: fn run() {");
        // Raw content is kept untouched
        assert_eq!(result.content, "    fn run() {");
    }

    #[test]
    fn test_search_result_accessors() {
        let file: SearchResult = FileResult::new("a", "x.txt", "/r/a/x.txt").into();
        assert_eq!(file.line_number(), None);
        assert_eq!(file.repository(), "a");
        assert_eq!(file.absolute_path(), Path::new("/r/a/x.txt"));

        let content: SearchResult =
            ContentResult::new("b", "y.rs", "/r/b/y.rs", 3, 1, "let y = 1;").into();
        assert_eq!(content.line_number(), Some(3));
        assert_eq!(content.relative_path(), "y.rs");
        assert_eq!(content.to_string(), "b:y.rs:3: let y = 1;");
    }
}
