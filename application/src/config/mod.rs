//! Application-level configuration.
//!
//! - [`SearchParams`]: fan-out deadlines and result limits

pub mod search_params;

pub use search_params::SearchParams;
