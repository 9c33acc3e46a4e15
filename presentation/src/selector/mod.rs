//! Terminal selectors

pub mod basic;

pub use basic::BasicSelector;
