//! Repository sets and group filtering outcomes.

pub mod error;
pub mod value_objects;

pub use error::FilterError;
pub use value_objects::{GroupFilterOutcome, RepositorySet};
