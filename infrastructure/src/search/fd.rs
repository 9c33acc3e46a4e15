//! fd-backed file searcher
//!
//! Invocation per repository:
//!
//! ```text
//! fd --type f --hidden --follow --exclude .git --color never --absolute-path -- <pattern|.> <root>
//! ```
//!
//! Output is one absolute path per line. Paths under the repository root
//! become root-relative; anything else keeps its absolute form.

use super::process::run_search_tool;
use async_trait::async_trait;
use reposeek_application::{RepositoryFilter, SearchParams, Searcher, fan_out};
use reposeek_domain::{FileResult, RepositorySet, SearchError, SearchKind, SearchResult};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

const TOOL: &str = "fd";

/// Primary file searcher
pub struct FdFileSearcher {
    filter: RepositoryFilter,
    timeout: Duration,
    command: String,
}

impl FdFileSearcher {
    pub fn new(filter: RepositoryFilter, params: &SearchParams) -> Self {
        Self {
            filter,
            timeout: params.file_timeout,
            command: TOOL.to_string(),
        }
    }

    /// Use a different binary (e.g. `fdfind` on Debian)
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }
}

fn build_command(program: &str, pattern: &str, root: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.args([
        "--type",
        "f",
        "--hidden",
        "--follow",
        "--exclude",
        ".git",
        "--color",
        "never",
        "--absolute-path",
        // Patterns such as `-notes` are positional, not flags
        "--",
    ]);
    cmd.arg(if pattern.is_empty() { "." } else { pattern });
    cmd.arg(root);
    cmd
}

/// Parse fd output for one repository
pub(crate) fn parse_fd_output(stdout: &str, alias: &str, root: &Path) -> Vec<SearchResult> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let absolute = if Path::new(line).is_absolute() {
                PathBuf::from(line)
            } else {
                root.join(line)
            };
            let relative = match absolute.strip_prefix(root) {
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => absolute.to_string_lossy().into_owned(),
            };
            FileResult::new(alias, relative, absolute).into()
        })
        .collect()
}

#[async_trait]
impl Searcher for FdFileSearcher {
    fn name(&self) -> &str {
        TOOL
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
        let program = self.command.clone();
        let pattern = pattern.to_string();

        fan_out(TOOL, &repos, self.timeout, move |target, cancel| {
            let cmd = build_command(&program, &pattern, &target.root);
            async move {
                let stdout = run_search_tool(cmd, TOOL, &target.alias, &cancel).await?;
                Ok(parse_fd_output(&stdout, &target.alias, &target.root))
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposeek_application::RepositoryGroupSource;
    use std::sync::Arc;

    struct NoGroups;

    impl RepositoryGroupSource for NoGroups {
        fn group_repositories(&self, _group: &str) -> Option<RepositorySet> {
            None
        }

        fn group_names(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn searcher() -> FdFileSearcher {
        FdFileSearcher::new(
            RepositoryFilter::new(Arc::new(NoGroups)),
            &SearchParams::default(),
        )
    }

    #[test]
    fn test_parse_relativizes_paths_under_root() {
        let out = "/r/a/src/main.rs\n/r/a/README.md\n";
        let results = parse_fd_output(out, "a", Path::new("/r/a"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].relative_path(), "src/main.rs");
        assert_eq!(results[0].display_text(), "a:src/main.rs");
        assert_eq!(results[0].absolute_path(), Path::new("/r/a/src/main.rs"));
    }

    #[test]
    fn test_parse_keeps_paths_outside_root_absolute() {
        let results = parse_fd_output("/elsewhere/linked.txt\n", "a", Path::new("/r/a"));
        assert_eq!(results[0].relative_path(), "/elsewhere/linked.txt");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        assert!(parse_fd_output("\n\n", "a", Path::new("/r/a")).is_empty());
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let cmd = build_command("fd", "", Path::new("/r/a"));
        let args: Vec<_> = cmd.as_std().get_args().collect();
        assert_eq!(args[args.len() - 2], ".");
        assert_eq!(args[args.len() - 1], "/r/a");
    }

    #[test]
    fn test_dash_pattern_is_positional() {
        let cmd = build_command("fd", "-h", Path::new("/r/a"));
        let args: Vec<_> = cmd.as_std().get_args().collect();
        let n = args.len();
        assert_eq!(args[n - 3], "--");
        assert_eq!(args[n - 2], "-h");
        assert_eq!(args[n - 1], "/r/a");
    }

    #[tokio::test]
    async fn test_unknown_group_fails_before_running() {
        let err = searcher()
            .search("x", &RepositorySet::new().with("a", "/r/a"), Some("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Filter(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_codes_are_isolated_per_repository() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        // Stands in for fd: last argument is the repository root
        let script = dir.path().join("fake-fd");
        std::fs::write(
            &script,
            "#!/bin/sh\nfor root; do :; done\ncase \"$root\" in\n  */a) echo \"$root/found.txt\" ;;\n  */b) echo boom >&2; exit 2 ;;\n  *) exit 1 ;;\nesac\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let repos = RepositorySet::new()
            .with("a", dir.path().join("a"))
            .with("b", dir.path().join("b"))
            .with("c", dir.path().join("c"));
        let results = searcher()
            .with_command(script.to_string_lossy())
            .search("found", &repos, None)
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_text(), "a:found.txt");
    }

    #[tokio::test]
    async fn test_real_fd_when_installed() {
        if which::which(TOOL).is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/foo.txt"), "x").unwrap();
        std::fs::write(root.join("bar.txt"), "x").unwrap();

        let repos = RepositorySet::new().with("a", &root);
        let results = searcher().search("foo", &repos, None).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relative_path(), "sub/foo.txt");

        std::fs::write(root.join("-notes.md"), "x").unwrap();
        let results = searcher().search("-notes", &repos, None).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].relative_path(), "-notes.md");
    }
}
