//! Core ODF package access.
//!
//! This module reads the members of an OpenDocument package, either from a
//! ZIP archive or from an extracted directory, and decodes its XML parts.

/// ODF package handling
mod package;
/// ODF XML parts
mod xml;

// Re-export main types for convenience
pub use package::{DirectoryPackage, OdfPackage, Package};
pub use xml::XmlPart;
