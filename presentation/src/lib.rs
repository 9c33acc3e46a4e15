//! Presentation layer for reposeek
//!
//! This crate contains CLI definitions, the numbered terminal selector,
//! output formatters and progress indicators.

pub mod cli;
pub mod output;
pub mod progress;
pub mod selector;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, SearchArgs};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SearchSpinner;
pub use selector::basic::BasicSelector;
