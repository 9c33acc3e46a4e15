//! Diagnose tools use case
//!
//! Probes a list of tool descriptors and aggregates their availability into
//! a [`DiagnosticSnapshot`]. The snapshot is rebuilt on every call.

use crate::ports::tool_probe::ToolProbe;
use reposeek_domain::{DiagnosticSnapshot, ToolDescriptor, ToolStatus};
use std::sync::Arc;
use tracing::debug;

/// Use case for building tool diagnostics
pub struct DiagnoseToolsUseCase {
    probe: Arc<dyn ToolProbe>,
    tools: Vec<ToolDescriptor>,
}

impl DiagnoseToolsUseCase {
    pub fn new(probe: Arc<dyn ToolProbe>, tools: impl Into<Vec<ToolDescriptor>>) -> Self {
        Self {
            probe,
            tools: tools.into(),
        }
    }

    /// Probe every tool once and build a snapshot
    pub async fn execute(&self) -> DiagnosticSnapshot {
        let mut statuses = Vec::with_capacity(self.tools.len());

        for tool in &self.tools {
            let available = self.probe.is_available(tool);
            let version = if available {
                match self.probe.version(tool).await {
                    Ok(v) => Some(v),
                    Err(e) => {
                        debug!(tool = tool.name, error = %e, "Version check failed");
                        None
                    }
                }
            } else {
                None
            };

            statuses.push(ToolStatus {
                name: tool.name.to_string(),
                command: tool.command.to_string(),
                available,
                version,
                required: tool.required,
                fallback: tool.fallback.to_string(),
                install_hint: tool.install_instructions(),
            });
        }

        DiagnosticSnapshot::new(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reposeek_domain::{Platform, ToolProbeError};

    // === Mock implementations ===

    struct MockProbe {
        installed: Vec<&'static str>,
        broken_version: Vec<&'static str>,
    }

    #[async_trait]
    impl ToolProbe for MockProbe {
        fn is_available(&self, tool: &ToolDescriptor) -> bool {
            self.installed.contains(&tool.command)
        }

        async fn version(&self, tool: &ToolDescriptor) -> Result<String, ToolProbeError> {
            if !self.is_available(tool) {
                return Err(ToolProbeError::ToolNotFound {
                    tool: tool.name.to_string(),
                });
            }
            if self.broken_version.contains(&tool.command) {
                return Err(ToolProbeError::VersionCheckFailed {
                    tool: tool.name.to_string(),
                    reason: "exit 2".to_string(),
                });
            }
            Ok(format!("{} 1.2.3", tool.name))
        }
    }

    fn tool(name: &'static str, required: bool) -> ToolDescriptor {
        ToolDescriptor {
            name,
            command: name,
            version_args: &["--version"],
            purpose: "testing",
            fallback: "none",
            install_hints: &[(Platform::Linux, "apt install it")],
            required,
        }
    }

    #[tokio::test]
    async fn test_snapshot_reflects_probe() {
        let probe = Arc::new(MockProbe {
            installed: vec!["fd", "git"],
            broken_version: vec!["git"],
        });
        let use_case = DiagnoseToolsUseCase::new(
            probe,
            vec![tool("fd", false), tool("rg", false), tool("git", true)],
        );

        let snapshot = use_case.execute().await;
        assert_eq!(snapshot.tools.len(), 3);

        let fd = snapshot.get("fd").unwrap();
        assert!(fd.available);
        assert_eq!(fd.version.as_deref(), Some("fd 1.2.3"));

        let rg = snapshot.get("rg").unwrap();
        assert!(!rg.available);
        assert!(rg.version.is_none());

        // Present but version check failed: still available
        let git = snapshot.get("git").unwrap();
        assert!(git.available);
        assert!(git.version.is_none());

        assert_eq!(snapshot.readiness(), 66);
    }
}
