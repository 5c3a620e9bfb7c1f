//! odtree - OpenDocument Text to semantic element trees
//!
//! This library reads OpenDocument Text packages (`.odt` files or extracted
//! package directories) and turns their XML parts into trees of typed
//! semantic elements, driven by a data catalog of element and attribute
//! definitions.
//!
//! # Features
//!
//! - **Catalog-driven**: Element kinds and attribute display names come from
//!   a JSON definition file, bundled by default and replaceable at runtime
//! - **Lossless**: Elements the catalog does not know keep their raw tag and
//!   verbatim source markup
//! - **Partitioned**: Body, font faces, automatic, common and master styles
//!   and settings are assembled independently
//! - **Serializable**: Documents round-trip through JSON
//!
//! # Example - Reading a document
//!
//! ```no_run
//! use odtree::{Catalog, Document};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::load()?;
//! let doc = Document::open("document.odt", &catalog)?;
//!
//! for element in doc.body.iter().flat_map(|e| e.descendants()) {
//!     if let Some(text) = element.text_value() {
//!         println!("{}", text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Dumping and exporting
//!
//! ```no_run
//! use odtree::{Catalog, Document, DumpOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_path("definitions.json")?;
//! let doc = Document::open("document.odt", &catalog)?;
//!
//! print!("{}", doc.dump_with(&DumpOptions::new().with_skip_empty_sections(true)));
//! std::fs::write("document.json", doc.to_json_pretty()?)?;
//! # Ok(())
//! # }
//! ```

/// Shared utilities (errors, BOM detection, XML escaping)
pub mod common;

/// OpenDocument Format reader
///
/// This module provides the package reader, markup parser, definition
/// catalog, semantic model and document assembly.
pub mod odf;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use odf::catalog::{AttributeDefinition, Catalog, ElementDefinition, ElementKind};
pub use odf::elements::{GenericNode, NodeTree, ParseOptions};
pub use odf::model::{Property, SemanticElement};
pub use odf::odt::{Document, DocumentState, DumpOptions, Partition};
