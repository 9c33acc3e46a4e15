//! Interactive picker adapters

mod fzf;

pub use fzf::FzfSelector;
