//! External tool registry and probing
//!
//! - [`registry`]: static descriptors for fd, rg, fzf, bat and git
//! - [`probe`]: `which`-based availability and version checks

pub mod probe;
pub mod registry;

pub use probe::SystemToolProbe;
pub use registry::{ALL_TOOLS, ToolRegistry};
