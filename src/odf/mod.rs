//! OpenDocument Format support.
//!
//! Reading is split into stages: package access ([`core`]), generic markup
//! parsing ([`elements`]), catalog lookup ([`catalog`]) and catalog-driven
//! transformation ([`transform`]) into the typed model ([`model`]). The
//! [`odt`] module assembles the stages into a [`Document`].

/// ODF constants (MIME types, part paths, partition roots)
pub mod constants;
/// Core ODF package access
pub mod core;
/// Generic markup nodes and parser
pub mod elements;
/// Element and attribute definition catalog
pub mod catalog;
/// Semantic element model
pub mod model;
/// Generic to semantic tree transformation
pub mod transform;
/// ODF text document (.odt) support
pub mod odt;

/// Re-export the main APIs
pub use catalog::{Catalog, ElementKind};
pub use model::{Property, SemanticElement};
pub use odt::{Document, DocumentState, DumpOptions, Partition};
