//! Tool probe port
//!
//! Answers whether an external tool is present and which version it is.
//! Nothing is cached: callers that need a stable answer within one
//! operation must ask once and keep the result.

use async_trait::async_trait;
use reposeek_domain::{ToolDescriptor, ToolProbeError};

/// Port for probing external tools
#[async_trait]
pub trait ToolProbe: Send + Sync {
    /// PATH lookup of the tool's command
    fn is_available(&self, tool: &ToolDescriptor) -> bool;

    /// Run the tool's version invocation.
    ///
    /// Fails with [`ToolProbeError::ToolNotFound`] when the tool is missing
    /// and [`ToolProbeError::VersionCheckFailed`] when the invocation errors.
    async fn version(&self, tool: &ToolDescriptor) -> Result<String, ToolProbeError>;
}
