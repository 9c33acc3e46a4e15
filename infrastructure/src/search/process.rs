//! Running an external search binary for one repository
//!
//! Exit code 0 is success, exit code 1 is "no matches" (empty output),
//! anything else fails that repository's unit only. Cancellation drops the
//! child, and `kill_on_drop` terminates it.

use reposeek_domain::SearchError;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Exit code meaning "ran fine, matched nothing"
const NO_MATCHES_EXIT_CODE: i32 = 1;

/// Run `command` to completion and return its stdout.
pub(crate) async fn run_search_tool(
    mut command: Command,
    tool: &str,
    repository: &str,
    cancel: &CancellationToken,
) -> Result<String, SearchError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Linux: the kernel sends SIGTERM to the child if we die first.
    #[cfg(target_os = "linux")]
    unsafe {
        command.pre_exec(|| {
            libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
            Ok(())
        });
    }

    let child = command.spawn().map_err(|e| match e.kind() {
        ErrorKind::NotFound => SearchError::tool_unavailable(tool),
        _ => SearchError::ToolExecutionFailed {
            tool: tool.to_string(),
            repository: repository.to_string(),
            exit_code: None,
            message: e.to_string(),
        },
    })?;

    let output = tokio::select! {
        output = child.wait_with_output() => output?,
        _ = cancel.cancelled() => {
            debug!(tool, repository, "Search cancelled, killing process");
            return Err(SearchError::ToolExecutionFailed {
                tool: tool.to_string(),
                repository: repository.to_string(),
                exit_code: None,
                message: "cancelled at deadline".to_string(),
            });
        }
    };

    match output.status.code() {
        Some(0) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
        Some(NO_MATCHES_EXIT_CODE) => {
            debug!(tool, repository, "No matches");
            Ok(String::new())
        }
        code => Err(SearchError::ToolExecutionFailed {
            tool: tool.to_string(),
            repository: repository.to_string(),
            exit_code: code,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}
