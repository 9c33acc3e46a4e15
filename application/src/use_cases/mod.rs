//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod diagnose_tools;
pub mod fan_out;
pub mod filter_repositories;
pub mod smart_search;
