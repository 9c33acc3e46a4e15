//! Plain text preview provider
//!
//! Files render as numbered lines: a window around the requested line, or
//! the head of the file. Commits render as `git show --stat`.

use reposeek_application::PreviewProvider;
use reposeek_domain::{PreviewError, PreviewRequest};
use std::fmt::Write as _;
use std::path::Path;
use std::process::Command;

/// [`PreviewProvider`] producing uncoloured text
#[derive(Debug, Clone)]
pub struct TextPreviewProvider {
    /// Lines shown above and below a requested line
    context_lines: usize,
    /// Lines shown when no line is requested
    head_lines: usize,
}

impl Default for TextPreviewProvider {
    fn default() -> Self {
        Self {
            context_lines: 10,
            head_lines: 40,
        }
    }
}

impl TextPreviewProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context_lines(mut self, lines: usize) -> Self {
        self.context_lines = lines;
        self
    }

    pub fn with_head_lines(mut self, lines: usize) -> Self {
        self.head_lines = lines;
        self
    }

    fn render_file(&self, path: &Path, line: Option<u32>) -> Result<String, PreviewError> {
        let text = std::fs::read_to_string(path).map_err(|e| PreviewError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let lines: Vec<&str> = text.lines().collect();

        let (start, end, marked) = match line {
            Some(n) if n > 0 => {
                let idx = n as usize - 1;
                let start = idx.saturating_sub(self.context_lines);
                let end = (idx + self.context_lines + 1).min(lines.len());
                (start, end, Some(idx))
            }
            _ => (0, self.head_lines.min(lines.len()), None),
        };

        let width = end.to_string().len();
        let mut out = String::new();
        for (idx, text) in lines.iter().enumerate().take(end).skip(start) {
            let marker = if Some(idx) == marked { '>' } else { ' ' };
            let _ = writeln!(out, "{}{:>width$} | {}", marker, idx + 1, text, width = width);
        }
        Ok(out)
    }

    fn render_commit(&self, repository: &Path, hash: &str) -> Result<String, PreviewError> {
        // git would read a leading '-' as an option
        if hash.is_empty() || hash.starts_with('-') {
            return Err(PreviewError::CommitFailed(format!(
                "invalid commit reference '{}'",
                hash
            )));
        }

        let output = Command::new("git")
            .arg("-C")
            .arg(repository)
            .args(["show", "--stat", "--color=never", hash])
            .output()
            .map_err(|e| PreviewError::CommitFailed(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PreviewError::CommitFailed(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PreviewProvider for TextPreviewProvider {
    fn render(&self, request: &PreviewRequest) -> Result<String, PreviewError> {
        match request {
            PreviewRequest::File { path, line } => self.render_file(path, *line),
            PreviewRequest::Commit {
                repository_path,
                hash,
            } => self.render_commit(repository_path, hash),
        }
    }
}
