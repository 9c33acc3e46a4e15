//! Selection-stage outcomes
//!
//! All of these are user-facing and non-fatal to the process.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No results to select from")]
    NoResults,

    #[error("No selection made")]
    NoSelectionMade,

    #[error("Selection cancelled")]
    Cancelled,

    #[error("Selection interrupted")]
    Interrupted,

    #[error("Invalid selection '{input}': enter a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("Picker failed (exit code {}): {message}", .code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()))]
    PickerError { code: Option<i32>, message: String },

    #[error("Picker returned an unknown line: {line}")]
    UnrecognizedSelection { line: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl SelectionError {
    /// The user backed out (cancel or interrupt), as opposed to a failure
    pub fn is_user_abort(&self) -> bool {
        matches!(
            self,
            SelectionError::Cancelled | SelectionError::Interrupted | SelectionError::NoSelectionMade
        )
    }
}

impl From<std::io::Error> for SelectionError {
    fn from(err: std::io::Error) -> Self {
        SelectionError::Io(err.to_string())
    }
}
