//! Unified error types for odtree.
//!
//! This module provides a single error type shared by the package reader,
//! the markup parser, the definition catalog and the document assembler.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
