//! ripgrep-backed content searcher
//!
//! Invocation per repository:
//!
//! ```text
//! rg --line-number --column --no-heading --with-filename --color never \
//!    --hidden --follow --text -g '!.git/**' --max-count <n> <pattern> <root>
//! ```
//!
//! Each output line is `path:line:column:content`. Lines that do not have
//! that shape are dropped; the rest of the output is still used.

use super::process::run_search_tool;
use async_trait::async_trait;
use reposeek_application::{RepositoryFilter, SearchParams, Searcher, fan_out};
use reposeek_domain::{ContentResult, RepositorySet, SearchError, SearchKind, SearchResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const TOOL: &str = "rg";

/// Primary content searcher
pub struct RgContentSearcher {
    filter: RepositoryFilter,
    timeout: Duration,
    max_count: usize,
    command: String,
}

impl RgContentSearcher {
    pub fn new(filter: RepositoryFilter, params: &SearchParams) -> Self {
        Self {
            filter,
            timeout: params.content_timeout,
            max_count: params.max_count,
            command: TOOL.to_string(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }
}

fn build_command(program: &str, pattern: &str, max_count: usize, root: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.args([
        "--line-number",
        "--column",
        "--no-heading",
        "--with-filename",
        "--color",
        "never",
        "--hidden",
        "--follow",
        "--text",
        "-g",
        "!.git/**",
        "--max-count",
    ]);
    cmd.arg(max_count.to_string());
    // `-e` keeps patterns starting with '-' from parsing as flags
    cmd.arg("-e").arg(pattern);
    cmd.arg(root);
    cmd
}

/// Parse one `path:line:column:content` line
pub(crate) fn parse_rg_line(line: &str, alias: &str, root: &Path) -> Result<ContentResult, SearchError> {
    let malformed = || SearchError::MalformedOutput {
        tool: TOOL.to_string(),
        line: line.to_string(),
    };

    let mut parts = line.splitn(4, ':');
    let (Some(path), Some(line_no), Some(column), Some(content)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let line_no: u32 = line_no.parse().map_err(|_| malformed())?;
    let column: u32 = column.parse().map_err(|_| malformed())?;

    let absolute = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        root.join(path)
    };
    let relative = match absolute.strip_prefix(root) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => path.to_string(),
    };

    Ok(ContentResult::new(alias, relative, absolute, line_no, column, content))
}

/// Parse rg output for one repository, dropping malformed lines
pub(crate) fn parse_rg_output(stdout: &str, alias: &str, root: &Path) -> Vec<SearchResult> {
    stdout
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_rg_line(line, alias, root) {
            Ok(result) => Some(result.into()),
            Err(e) => {
                debug!(repository = alias, error = %e, "Dropping malformed line");
                None
            }
        })
        .collect()
}

#[async_trait]
impl Searcher for RgContentSearcher {
    fn name(&self) -> &str {
        TOOL
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
        let program = self.command.clone();
        let pattern = pattern.to_string();
        let max_count = self.max_count;

        fan_out(TOOL, &repos, self.timeout, move |target, cancel| {
            let cmd = build_command(&program, &pattern, max_count, &target.root);
            async move {
                let stdout = run_search_tool(cmd, TOOL, &target.alias, &cancel).await?;
                Ok(parse_rg_output(&stdout, &target.alias, &target.root))
            }
        })
        .await
    }
}
