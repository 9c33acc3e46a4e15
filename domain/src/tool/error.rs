//! Tool probe errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolProbeError {
    /// The tool's command is not on PATH
    #[error("Tool not found: {tool}")]
    ToolNotFound { tool: String },

    /// The tool is present but its version invocation failed
    #[error("Version check failed for {tool}: {reason}")]
    VersionCheckFailed { tool: String, reason: String },
}
