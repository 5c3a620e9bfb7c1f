//! Generic markup node produced by the XML parser.
//!
//! A [`GenericNode`] is either a tagged element (tag name, ordered attributes,
//! ordered children) or a plain text node (empty tag, character data in
//! `text`). Nodes parsed from a source document remember the byte span of
//! their whole subtree so the original markup can be recovered verbatim.

use crate::common::xml::{escape_attribute, escape_text};
use crate::odf::constants::is_text_tag;
use crate::odf::elements::attr_parser::parse_bool_or;
use std::borrow::Cow;
use std::ops::Range;

/// A node of the generic markup tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericNode {
    tag: String,
    attributes: Vec<(String, String)>,
    pub(crate) children: Vec<GenericNode>,
    text: String,
    pub(crate) span: Option<Range<usize>>,
}

impl GenericNode {
    /// Create a new tagged node with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Create a plain text node.
    pub fn text_node(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute append.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: GenericNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style direct text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append an attribute, keeping source order.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Append a child node.
    pub fn push_child(&mut self, child: GenericNode) {
        self.children.push(child);
    }

    /// Raw tag name; empty for text nodes.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Child nodes in source order.
    pub fn children(&self) -> &[GenericNode] {
        &self.children
    }

    /// Directly associated text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this is a plain text node (empty tag or the text marker).
    pub fn is_text(&self) -> bool {
        is_text_tag(&self.tag)
    }

    /// Byte range of this node's subtree in the parsed source, if known.
    pub fn span(&self) -> Option<&Range<usize>> {
        self.span.as_ref()
    }

    /// Get attribute value by exact name.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get boolean attribute value, falling back to `default` when the
    /// attribute is absent or unparseable.
    pub fn get_bool_attribute(&self, name: &str, default: bool) -> bool {
        parse_bool_or(self.get_attribute(name), default)
    }

    /// Depth-first, pre-order search for the first node (this one included)
    /// with the given tag.
    pub fn find(&self, tag: &str) -> Option<&GenericNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(tag))
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_recursive(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.children {
            text.push_str(&child.text_recursive());
        }
        text
    }

    /// Serialized form of the whole subtree.
    ///
    /// Returns the exact source substring when the node was parsed from
    /// `source`, otherwise a canonical serialization of the node's fields.
    pub fn outer_markup<'a>(&'a self, source: Option<&'a str>) -> Cow<'a, str> {
        match (&self.span, source) {
            (Some(span), Some(source)) => match source.get(span.clone()) {
                Some(slice) => Cow::Borrowed(slice),
                None => Cow::Owned(self.to_xml_string()),
            },
            _ => Cow::Owned(self.to_xml_string()),
        }
    }

    /// Serialize node to XML string
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::with_capacity(self.estimated_xml_len());
        self.write_xml(&mut xml);
        xml
    }

    fn estimated_xml_len(&self) -> usize {
        if self.is_text() {
            return self.text.len() + 8;
        }

        let mut len = 1 + self.tag.len();
        for (key, value) in &self.attributes {
            len += key.len() + value.len() + 12;
        }

        if self.children.is_empty() && self.text.is_empty() {
            return len + 2;
        }

        len += 1 + self.text.len();
        for child in &self.children {
            len += child.estimated_xml_len();
        }
        len + 3 + self.tag.len()
    }

    fn write_xml(&self, output: &mut String) {
        if self.is_text() {
            output.push_str(&escape_text(&self.text));
            return;
        }

        // Opening tag
        output.push('<');
        output.push_str(&self.tag);
        for (key, value) in &self.attributes {
            output.push(' ');
            output.push_str(key);
            output.push_str("=\"");
            output.push_str(&escape_attribute(value));
            output.push('"');
        }

        if self.children.is_empty() && self.text.is_empty() {
            output.push_str("/>");
            return;
        }
        output.push('>');

        if !self.text.is_empty() {
            output.push_str(&escape_text(&self.text));
        }
        for child in &self.children {
            child.write_xml(output);
        }

        // Closing tag
        output.push_str("</");
        output.push_str(&self.tag);
        output.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_node() {
        let node = GenericNode::text_node("hello");
        assert!(node.is_text());
        assert_eq!(node.tag(), "");
        assert_eq!(node.text(), "hello");
        assert!(GenericNode::new("text").is_text());
        assert!(!GenericNode::new("text:p").is_text());
    }

    #[test]
    fn test_attribute_order_and_lookup() {
        let node = GenericNode::new("text:p")
            .with_attribute("b", "2")
            .with_attribute("a", "1");
        let names: Vec<&str> = node.attributes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(node.get_attribute("a"), Some("1"));
        assert_eq!(node.get_attribute("A"), None);
    }

    #[test]
    fn test_bool_attribute_fail_safe() {
        let node = GenericNode::new("office:text")
            .with_attribute("text:global", "true")
            .with_attribute("text:use-soft-page-breaks", "maybe");
        assert!(node.get_bool_attribute("text:global", false));
        assert!(!node.get_bool_attribute("text:use-soft-page-breaks", false));
        assert!(node.get_bool_attribute("text:use-soft-page-breaks", true));
        assert!(!node.get_bool_attribute("missing", false));
    }

    #[test]
    fn test_find_is_pre_order() {
        let tree = GenericNode::new("root")
            .with_child(GenericNode::new("a").with_child(GenericNode::new("target").with_attribute("n", "1")))
            .with_child(GenericNode::new("target").with_attribute("n", "2"));
        assert_eq!(tree.find("target").and_then(|n| n.get_attribute("n")), Some("1"));
        assert!(tree.find("root").is_some());
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_to_xml_string() {
        let node = GenericNode::new("text:span")
            .with_attribute("text:style-name", "T\"1\"")
            .with_child(GenericNode::text_node("a < b"))
            .with_child(GenericNode::new("text:s"));
        assert_eq!(
            node.to_xml_string(),
            "<text:span text:style-name=\"T&quot;1&quot;\">a &lt; b<text:s/></text:span>"
        );
    }

    #[test]
    fn test_outer_markup_prefers_source_span() {
        let source = "<a  x='1'><b/></a>";
        let mut node = GenericNode::new("a").with_attribute("x", "1");
        node.span = Some(0..source.len());
        assert_eq!(node.outer_markup(Some(source)), source);
        assert_eq!(node.outer_markup(None), "<a x=\"1\"/>");

        node.span = Some(0..500);
        assert_eq!(node.outer_markup(Some(source)), "<a x=\"1\"/>");
    }
}
