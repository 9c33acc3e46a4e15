//! Built-in fallback searchers
//!
//! Pure directory walks, used when `fd` or `rg` is missing or fails. Both
//! fan out one blocking walk per repository under the (longer) fallback
//! deadline.
//!
//! Walk rules shared by both searchers:
//!
//! - `.git` directories are never entered
//! - unreadable entries are skipped
//! - dot-prefixed file names are skipped unless the pattern starts with `.`
//! - matching is a case-insensitive substring test

use async_trait::async_trait;
use reposeek_application::{RepositoryFilter, RepositoryTarget, SearchParams, Searcher, fan_out};
use reposeek_domain::{
    ContentResult, FileResult, RepositorySet, SearchError, SearchKind, SearchResult,
};
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Files larger than this are not scanned for content
const MAX_CONTENT_FILE_BYTES: u64 = 5 * 1024 * 1024;

fn is_git_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == ".git"
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Every file under `root` the walk rules admit, stopping early on cancel
fn walk_files<'a>(
    root: &'a Path,
    include_hidden: bool,
    cancel: &'a CancellationToken,
) -> impl Iterator<Item = DirEntry> + 'a {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_git_dir(entry))
        .take_while(move |_| !cancel.is_cancelled())
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!(error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| include_hidden || !is_hidden(entry))
}

fn relative_to(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

/// Files whose name contains `pattern`, case-insensitively
pub(crate) fn find_files(
    target: &RepositoryTarget,
    pattern: &str,
    cancel: &CancellationToken,
) -> Vec<SearchResult> {
    let needle = pattern.to_lowercase();
    let include_hidden = pattern.starts_with('.');

    walk_files(&target.root, include_hidden, cancel)
        .filter(|entry| {
            needle.is_empty()
                || entry
                    .file_name()
                    .to_string_lossy()
                    .to_lowercase()
                    .contains(&needle)
        })
        .map(|entry| {
            let relative = relative_to(entry.path(), &target.root);
            FileResult::new(&target.alias, relative, entry.path()).into()
        })
        .collect()
}

/// Per-char lowercase, so every folded char maps back to one source char
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// 1-based column, in chars of `line`, of the first case-insensitive match
fn match_column(line: &str, needle: &str) -> Option<u32> {
    let mut folded = String::with_capacity(line.len());
    // (byte offset in `folded`, column in `line`) for each folded char
    let mut columns = Vec::with_capacity(line.len());
    for (column, ch) in line.chars().enumerate() {
        for lower in ch.to_lowercase() {
            columns.push((folded.len(), column as u32 + 1));
            folded.push(lower);
        }
    }

    let byte = folded.find(needle)?;
    columns
        .binary_search_by_key(&byte, |&(offset, _)| offset)
        .ok()
        .map(|idx| columns[idx].1)
}

/// Lines containing `pattern`, case-insensitively, at most `max_count` per file
pub(crate) fn grep_files(
    target: &RepositoryTarget,
    pattern: &str,
    max_count: usize,
    cancel: &CancellationToken,
) -> Vec<SearchResult> {
    let needle = fold_case(pattern);
    let include_hidden = pattern.starts_with('.');
    let mut results = Vec::new();

    for entry in walk_files(&target.root, include_hidden, cancel) {
        match entry.metadata() {
            Ok(meta) if meta.len() <= MAX_CONTENT_FILE_BYTES => {}
            _ => continue,
        }
        // Binary and non-UTF-8 files fail here
        let Ok(text) = std::fs::read_to_string(entry.path()) else {
            continue;
        };

        let relative = relative_to(entry.path(), &target.root);
        let matches = text
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                match_column(line, &needle).map(|column| (idx as u32 + 1, column, line))
            })
            .take(max_count);

        for (line_no, column, line) in matches {
            results.push(
                ContentResult::new(
                    &target.alias,
                    relative.clone(),
                    entry.path(),
                    line_no,
                    column,
                    line,
                )
                .into(),
            );
        }
    }

    results
}

async fn run_blocking<F>(job: F) -> Result<Vec<SearchResult>, SearchError>
where
    F: FnOnce() -> Vec<SearchResult> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| SearchError::Io(format!("walk task failed: {}", e)))
}

/// Fallback file searcher
pub struct WalkFileSearcher {
    filter: RepositoryFilter,
    timeout: Duration,
}

impl WalkFileSearcher {
    pub fn new(filter: RepositoryFilter, params: &SearchParams) -> Self {
        Self {
            filter,
            timeout: params.fallback_timeout,
        }
    }
}

#[async_trait]
impl Searcher for WalkFileSearcher {
    fn name(&self) -> &str {
        "walk"
    }

    fn kind(&self) -> SearchKind {
        SearchKind::File
    }

    async fn search(
        &self,
        pattern: &str,
        repos: &RepositorySet,
        group: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let repos = self.filter.resolve(repos, group)?;
        debug!(repositories = repos.len(), "Walking repositories for files");
        let pattern = pattern.to_string();

        fan_out("walk", &repos, self.timeout, move |target, cancel| {
            let pattern = pattern.clone();
            run_blocking(move || find_files(&target, &pattern, &cancel))
        })
        .await
    }
}

/// Fallback content searcher
pub struct WalkContentSearcher {
    filter: RepositoryFilter,
    timeout: Duration,
    max_count: usize,
}

impl WalkContentSearcher {
    pub fn new(filter: RepositoryFilter, params: &SearchParams) -> Self {
        Self {
            filter,
            timeout: params.fallback_timeout,
            max_count: params.max_count,
        }
    }
}

#[async_trait]
impl Searcher for WalkContentSearcher {
    fn name(&self) -> &str {
        "scan"
    }

    fn kind(&self) -> SearchKind {
        SearchKind::Content
    }

    async fn search(
        &self,
        pattern: &str,
        repos: &RepositorySet,
        group: Option<&str>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let repos = self.filter.resolve(repos, group)?;
        debug!(repositories = repos.len(), "Scanning repositories for content");
        let pattern = pattern.to_string();
        let max_count = self.max_count;

        fan_out("scan", &repos, self.timeout, move |target, cancel| {
            let pattern = pattern.clone();
            run_blocking(move || grep_files(&target, &pattern, max_count, &cancel))
        })
        .await
    }
}
