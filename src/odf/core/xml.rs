//! XML parts of an ODF package.

use crate::common::bom::{BomKind, strip_bom};
use crate::common::{Error, Result};
use crate::odf::elements::{MarkupParser, NodeTree, ParseOptions};

/// Raw XML content of one package member
#[derive(Debug, Clone)]
pub struct XmlPart {
    content: String,
}

impl XmlPart {
    /// Decode XML content from bytes.
    ///
    /// A leading UTF-8 BOM is dropped. Parts in other encodings are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (bom, body) = strip_bom(bytes);
        if let Some(kind) = bom.filter(|kind| *kind != BomKind::Utf8) {
            return Err(Error::InvalidFormat(format!(
                "Unsupported {} encoded XML part",
                kind.encoding_name()
            )));
        }

        let content = std::str::from_utf8(body)
            .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in XML content".to_string()))?
            .to_string();
        Ok(Self { content })
    }

    /// Get the raw XML content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parse the content into a generic node tree.
    pub fn parse(self, options: &ParseOptions) -> Result<NodeTree> {
        MarkupParser::new(options.clone()).parse(self.content)
    }
}
