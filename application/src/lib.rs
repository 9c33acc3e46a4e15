//! Application layer for reposeek
//!
//! This crate contains use cases, port definitions, and search parameters.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SearchParams;
pub use ports::{
    group_source::RepositoryGroupSource, preview::PreviewProvider,
    result_selector::ResultSelector, searcher::Searcher, tool_probe::ToolProbe,
};
pub use use_cases::diagnose_tools::DiagnoseToolsUseCase;
pub use use_cases::fan_out::{RepositoryTarget, fan_out};
pub use use_cases::filter_repositories::RepositoryFilter;
pub use use_cases::smart_search::{SelectorSet, SmartSearcher};
