//! Preview provider port
//!
//! Renders preview text for a [`PreviewRequest`]. Implementations live in
//! the infrastructure layer.

use reposeek_domain::{PreviewError, PreviewRequest};

/// Port for rendering previews
pub trait PreviewProvider: Send + Sync {
    fn render(&self, request: &PreviewRequest) -> Result<String, PreviewError>;
}
