//! Typed output model: semantic elements and their properties.

pub mod element;
pub mod property;

pub use element::{Descendants, SemanticElement};
pub use property::{Property, separate_words};
