//! Search parameters: deadlines and limits for the search use cases.
//!
//! These are application-layer concerns, not domain policy. The
//! infrastructure config loader fills them from the `[search]` and
//! `[picker]` tables.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deadlines and limits shared by the searchers and selectors.
///
/// | Parameter | Default | Used by |
/// |-----------|---------|---------|
/// | `file_timeout` | 10s | fd file search |
/// | `content_timeout` | 15s | rg content search |
/// | `fallback_timeout` | 30s | built-in walk searchers |
/// | `max_count` | 50 | matches per file (content search) |
/// | `basic_limit` | 20 | results listed by the numbered prompt |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Deadline for a whole file-search fan-out
    pub file_timeout: Duration,
    /// Deadline for a whole content-search fan-out
    pub content_timeout: Duration,
    /// Deadline for the built-in walk, which is slower
    pub fallback_timeout: Duration,
    /// Maximum matches reported per file
    pub max_count: usize,
    /// Maximum results listed by the numbered prompt
    pub basic_limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            file_timeout: Duration::from_secs(10),
            content_timeout: Duration::from_secs(15),
            fallback_timeout: Duration::from_secs(30),
            max_count: 50,
            basic_limit: 20,
        }
    }
}

impl SearchParams {
    // ==================== Builder Methods ====================

    pub fn with_file_timeout(mut self, timeout: Duration) -> Self {
        self.file_timeout = timeout;
        self
    }

    pub fn with_content_timeout(mut self, timeout: Duration) -> Self {
        self.content_timeout = timeout;
        self
    }

    pub fn with_fallback_timeout(mut self, timeout: Duration) -> Self {
        self.fallback_timeout = timeout;
        self
    }

    pub fn with_max_count(mut self, max: usize) -> Self {
        self.max_count = max;
        self
    }

    pub fn with_basic_limit(mut self, limit: usize) -> Self {
        self.basic_limit = limit;
        self
    }
}
