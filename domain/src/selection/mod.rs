//! Selection: the picker line protocol and selection outcomes.

pub mod error;
pub mod protocol;

pub use error::SelectionError;
pub use protocol::{
    PICKER_DELIMITER, format_for_picker, format_picker_line, parse_picker_selection,
};
