//! Result selector port
//!
//! Defines how the user picks one result out of a result set.
//!
//! # Implementations
//!
//! - **Interactive**: `FzfSelector` in the infrastructure layer drives an
//!   external picker process
//! - **Basic**: `BasicSelector` in the presentation layer prints a numbered
//!   list and reads a number from the terminal

use async_trait::async_trait;
use reposeek_domain::{SearchResult, SelectionError};

/// Port for choosing one result
#[async_trait]
pub trait ResultSelector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Let the user choose one of `results`.
    ///
    /// Fails with [`SelectionError::NoResults`] when `results` is empty.
    async fn select(
        &self,
        results: &[SearchResult],
        prompt: &str,
    ) -> Result<SearchResult, SelectionError>;
}
