//! Generic markup layer.
//!
//! This module turns ODF XML parts into generic node trees and offers the
//! fail-safe attribute helpers used when reading them.

/// Fail-safe scalar attribute parsing
pub mod attr_parser;
/// Generic markup node
pub mod element;
/// XML to generic node tree parser
pub mod parser;

pub use element::GenericNode;
pub use parser::{DEFAULT_MAX_DEPTH, MarkupParser, NodeTree, ParseOptions};
