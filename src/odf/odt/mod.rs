//! OpenDocument Text (.odt) documents.
//!
//! A [`Document`] holds seven independent partitions of semantic elements:
//! the body from `content.xml`, font faces and automatic styles from
//! `content.xml`, automatic, common and master styles from `styles.xml`, and
//! the first settings item set from `settings.xml`.
//!
//! # References
//! - ODF Specification: §3 (Document Structure), §16 (Styles), §2.4 (Settings)

mod assembler;
mod document;
mod dump;

pub use assembler::DocumentAssembler;
pub use document::{Document, DocumentState, Partition};
pub use dump::{DocumentDump, DumpOptions, dump_elements};
