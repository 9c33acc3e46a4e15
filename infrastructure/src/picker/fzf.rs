//! fzf-driven interactive selector
//!
//! Protocol:
//!
//! ```text
//! stdin  ◀── writer task: one "abs_path:line:display" line per result, then EOF
//! stdout ──▶ reader task: the single chosen line (or nothing)
//! exit   ──▶ awaited only after both tasks have finished
//! ```
//!
//! | Exit code | Outcome |
//! |-----------|---------|
//! | 0, no output | `NoSelectionMade` |
//! | 0 | parsed selection |
//! | 1 | `Cancelled` |
//! | 130 | `Interrupted` |
//! | other | `PickerError` |

use async_trait::async_trait;
use reposeek_application::ResultSelector;
use reposeek_domain::{
    PICKER_DELIMITER, SearchResult, SelectionError, format_for_picker, parse_picker_selection,
};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::debug;

const CANCELLED_EXIT_CODE: i32 = 1;
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Interactive selector backed by an fzf-compatible binary
#[derive(Debug, Clone)]
pub struct FzfSelector {
    command: String,
    height: String,
}

impl Default for FzfSelector {
    fn default() -> Self {
        Self {
            command: "fzf".to_string(),
            height: "40%".to_string(),
        }
    }
}

impl FzfSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    fn build_command(&self, prompt: &str) -> Command {
        let mut cmd = Command::new(&self.command);
        cmd.arg("--prompt")
            .arg(format!("{}> ", prompt))
            .arg("--delimiter")
            .arg(PICKER_DELIMITER.to_string())
            // Hide the absolute path and line number columns
            .arg("--with-nth")
            .arg("3..")
            .arg("--no-multi")
            .arg("--height")
            .arg(&self.height)
            .arg("--reverse")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }

    fn picker_error(message: impl Into<String>) -> SelectionError {
        SelectionError::PickerError {
            code: None,
            message: message.into(),
        }
    }
}

#[async_trait]
impl ResultSelector for FzfSelector {
    fn name(&self) -> &str {
        "fzf"
    }

    async fn select(
        &self,
        results: &[SearchResult],
        prompt: &str,
    ) -> Result<SearchResult, SelectionError> {
        if results.is_empty() {
            return Err(SelectionError::NoResults);
        }

        let block = format_for_picker(results);
        let mut child = self
            .build_command(prompt)
            .spawn()
            .map_err(|e| Self::picker_error(format!("failed to start {}: {}", self.command, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Self::picker_error("picker stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Self::picker_error("picker stdout not captured"))?;

        let writer = tokio::spawn(async move {
            if let Err(e) = stdin.write_all(block.as_bytes()).await {
                // The picker may exit before consuming everything
                if e.kind() != ErrorKind::BrokenPipe {
                    debug!(error = %e, "Failed to write picker input");
                }
            }
            // Dropping stdin closes the pipe so the picker sees EOF
            drop(stdin);
        });

        let reader = tokio::spawn(async move {
            let mut line = String::new();
            BufReader::new(stdout).read_line(&mut line).await.map(|_| line)
        });

        let (written, read) = tokio::join!(writer, reader);
        written.map_err(|e| Self::picker_error(format!("picker writer failed: {}", e)))?;
        let selected = read
            .map_err(|e| Self::picker_error(format!("picker reader failed: {}", e)))??;

        let status = child.wait().await?;
        debug!(code = ?status.code(), selected = %selected.trim_end(), "Picker exited");

        match status.code() {
            Some(0) if selected.trim().is_empty() => Err(SelectionError::NoSelectionMade),
            Some(0) => parse_picker_selection(&selected, results)
                .cloned()
                .ok_or_else(|| SelectionError::UnrecognizedSelection {
                    line: selected.trim_end().to_string(),
                }),
            Some(CANCELLED_EXIT_CODE) => Err(SelectionError::Cancelled),
            Some(INTERRUPTED_EXIT_CODE) => Err(SelectionError::Interrupted),
            Some(code) => Err(SelectionError::PickerError {
                code: Some(code),
                message: format!("{} exited with code {}", self.command, code),
            }),
            None => Err(Self::picker_error(format!(
                "{} terminated by signal",
                self.command
            ))),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use reposeek_domain::{ContentResult, FileResult};
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn results() -> Vec<SearchResult> {
        vec![
            FileResult::new("a", "src/main.rs", "/r/a/src/main.rs").into(),
            ContentResult::new("b", "lib.rs", "/r/b/lib.rs", 3, 1, "fn run() {}").into(),
            FileResult::new("c", "notes:v2.md", "/r/c/notes:v2.md").into(),
        ]
    }

    /// Selector whose picker is a shell script ignoring its arguments
    fn scripted(body: &str) -> (TempDir, FzfSelector) {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("fake-picker");
        std::fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        let selector = FzfSelector::new().with_command(script.to_string_lossy());
        (dir, selector)
    }

    #[tokio::test]
    async fn test_empty_results() {
        let (_dir, selector) = scripted("exit 0");
        assert_eq!(
            selector.select(&[], "pick").await.unwrap_err(),
            SelectionError::NoResults
        );
    }

    #[tokio::test]
    async fn test_selected_line_maps_back_to_result() {
        let (_dir, selector) = scripted("sed -n 2p");
        let results = results();
        let chosen = selector.select(&results, "pick").await.unwrap();
        assert_eq!(chosen, results[1]);
    }

    #[tokio::test]
    async fn test_display_text_with_colons_round_trips() {
        let (_dir, selector) = scripted("sed -n 3p");
        let results = results();
        let chosen = selector.select(&results, "pick").await.unwrap();
        assert_eq!(chosen, results[2]);
    }

    #[tokio::test]
    async fn test_no_output_is_no_selection() {
        let (_dir, selector) = scripted("cat > /dev/null");
        assert_eq!(
            selector.select(&results(), "pick").await.unwrap_err(),
            SelectionError::NoSelectionMade
        );
    }

    #[tokio::test]
    async fn test_exit_one_is_cancelled() {
        let (_dir, selector) = scripted("cat > /dev/null; exit 1");
        assert_eq!(
            selector.select(&results(), "pick").await.unwrap_err(),
            SelectionError::Cancelled
        );
    }

    #[tokio::test]
    async fn test_exit_130_is_interrupted() {
        let (_dir, selector) = scripted("head -n 1; exit 130");
        assert_eq!(
            selector.select(&results(), "pick").await.unwrap_err(),
            SelectionError::Interrupted
        );
    }

    #[tokio::test]
    async fn test_other_exit_is_picker_error() {
        let (_dir, selector) = scripted("exit 2");
        match selector.select(&results(), "pick").await.unwrap_err() {
            SelectionError::PickerError { code, .. } => assert_eq!(code, Some(2)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_line_is_unrecognized() {
        let (_dir, selector) = scripted("cat > /dev/null; echo 'nothing:0:like this'");
        match selector.select(&results(), "pick").await.unwrap_err() {
            SelectionError::UnrecognizedSelection { line } => {
                assert_eq!(line, "nothing:0:like this")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_picker_exiting_early_on_large_input() {
        let (_dir, selector) = scripted("exit 1");
        let many: Vec<SearchResult> = (0..20_000)
            .map(|i| FileResult::new("a", format!("f{i}.txt"), format!("/r/a/f{i}.txt")).into())
            .collect();
        assert_eq!(
            selector.select(&many, "pick").await.unwrap_err(),
            SelectionError::Cancelled
        );
    }

    #[tokio::test]
    async fn test_missing_picker_binary() {
        let selector = FzfSelector::new().with_command("definitely_not_a_command_123xyz");
        assert!(matches!(
            selector.select(&results(), "pick").await.unwrap_err(),
            SelectionError::PickerError { code: None, .. }
        ));
    }
}
