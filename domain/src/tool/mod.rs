//! Tool domain: descriptors of external binaries and their diagnostics.
//!
//! - [`entities::ToolDescriptor`]: static description (command, install hints)
//! - [`value_objects::DiagnosticSnapshot`]: availability report with readiness
//! - [`error::ToolProbeError`]: lookup / version-check failures

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Platform, ToolDescriptor};
pub use error::ToolProbeError;
pub use value_objects::{DiagnosticSnapshot, DiagnosticSummary, ToolStatus};
