//! System tool probe
//!
//! PATH lookup via `which`, version via running the tool. Nothing is cached.

use async_trait::async_trait;
use reposeek_application::ports::tool_probe::ToolProbe;
use reposeek_domain::{ToolDescriptor, ToolProbeError};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// [`ToolProbe`] backed by the real environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolProbe;

impl SystemToolProbe {
    pub fn new() -> Self {
        Self
    }

    /// Check if a command is available on the system
    pub fn is_command_available(command: &str) -> bool {
        which::which(command).is_ok()
    }
}

#[async_trait]
impl ToolProbe for SystemToolProbe {
    fn is_available(&self, tool: &ToolDescriptor) -> bool {
        Self::is_command_available(tool.command)
    }

    async fn version(&self, tool: &ToolDescriptor) -> Result<String, ToolProbeError> {
        if !self.is_available(tool) {
            return Err(ToolProbeError::ToolNotFound {
                tool: tool.name.to_string(),
            });
        }

        let output = Command::new(tool.command)
            .args(tool.version_args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ToolProbeError::VersionCheckFailed {
                tool: tool.name.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolProbeError::VersionCheckFailed {
                tool: tool.name.to_string(),
                reason: format!("exit {:?}: {}", output.status.code(), stderr.trim()),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = stdout.lines().next().unwrap_or_default().trim().to_string();
        debug!(tool = tool.name, version = %version, "Probed tool version");
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposeek_domain::Platform;

    fn descriptor(command: &'static str, version_args: &'static [&'static str]) -> ToolDescriptor {
        ToolDescriptor {
            name: command,
            command,
            version_args,
            purpose: "testing",
            fallback: "none",
            install_hints: &[(Platform::Linux, "n/a")],
            required: false,
        }
    }

    #[test]
    fn test_is_command_available() {
        #[cfg(unix)]
        assert!(SystemToolProbe::is_command_available("sh"));
        assert!(!SystemToolProbe::is_command_available(
            "definitely_not_a_command_123xyz"
        ));
    }

    #[tokio::test]
    async fn test_version_of_missing_tool() {
        let err = SystemToolProbe::new()
            .version(&descriptor("definitely_not_a_command_123xyz", &["--version"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolProbeError::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_version_takes_first_line() {
        let tool = descriptor("sh", &["-c", "echo 'sh 9.9'; echo second"]);
        let version = SystemToolProbe::new().version(&tool).await.unwrap();
        assert_eq!(version, "sh 9.9");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_version_check_failure() {
        let tool = descriptor("sh", &["-c", "exit 3"]);
        let err = SystemToolProbe::new().version(&tool).await.unwrap_err();
        assert!(matches!(err, ToolProbeError::VersionCheckFailed { .. }));
    }
}
