//! Search results and search errors.
//!
//! - [`entities::FileResult`] / [`entities::ContentResult`]: typed results
//! - [`entities::SearchResult`]: either kind, as consumed by selectors
//! - [`error::SearchError`]: the search-stage error taxonomy

pub mod entities;
pub mod error;

pub use entities::{ContentResult, FileResult, SearchKind, SearchResult};
pub use error::SearchError;
