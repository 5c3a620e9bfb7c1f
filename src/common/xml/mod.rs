//! XML text helpers shared by the markup parser and serializer.

pub mod escape;

pub use escape::{escape_attribute, escape_text, resolve_entity, unescape_xml};
