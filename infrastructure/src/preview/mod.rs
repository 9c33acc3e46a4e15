//! Preview adapters

mod text;

pub use text::TextPreviewProvider;
