//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod group_source;
pub mod preview;
pub mod result_selector;
pub mod searcher;
pub mod tool_probe;
