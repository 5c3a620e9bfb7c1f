//! Common types and utilities shared across the crate.
//!
//! This module provides the unified error type, XML text helpers and byte
//! order mark handling used by the ODF reader.

// Submodule declarations
pub mod bom;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
