//! Searcher adapters
//!
//! | Searcher | Kind | Backed by |
//! |----------|------|-----------|
//! | [`FdFileSearcher`] | file | `fd` |
//! | [`RgContentSearcher`] | content | `rg` |
//! | [`WalkFileSearcher`] | file | built-in walk |
//! | [`WalkContentSearcher`] | content | built-in walk |

mod fd;
mod process;
mod rg;
mod walk;

pub use fd::FdFileSearcher;
pub use rg::RgContentSearcher;
pub use walk::{WalkContentSearcher, WalkFileSearcher};
