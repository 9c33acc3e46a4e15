//! Domain layer for reposeek
//!
//! This crate contains the value types, the picker line protocol and the
//! error taxonomy. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! - **Repository set**: alias → absolute path, narrowed by named groups
//! - **Search result**: a file or a matching line, with a canonical
//!   display text that is also the round-trip key for picker selection
//! - **Tool descriptor**: static description of an external binary
//!   (fd, rg, fzf, ...) and how to install it

pub mod preview;
pub mod repository;
pub mod search;
pub mod selection;
pub mod tool;

// Re-export commonly used types
pub use preview::{PreviewError, PreviewRequest};
pub use repository::{FilterError, GroupFilterOutcome, RepositorySet};
pub use search::{ContentResult, FileResult, SearchError, SearchKind, SearchResult};
pub use selection::{
    PICKER_DELIMITER, SelectionError, format_for_picker, format_picker_line,
    parse_picker_selection,
};
pub use tool::{
    DiagnosticSnapshot, DiagnosticSummary, Platform, ToolDescriptor, ToolProbeError, ToolStatus,
};
