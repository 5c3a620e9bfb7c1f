//! Generic markup parser.
//!
//! Turns an XML part (content.xml, styles.xml, settings.xml) into a tree of
//! [`GenericNode`]s. Every tagged node records the byte span of its subtree in
//! the source text, which lets unrecognized regions be preserved verbatim.

use crate::common::xml::{resolve_entity, unescape_xml};
use crate::common::{Error, Result};
use crate::odf::elements::element::GenericNode;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Default limit on element nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options controlling how markup is turned into generic nodes.
///
/// Comments and processing instructions are skipped without splitting the
/// surrounding character data, so `a<!--c-->b` yields one text node `ab`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Keep whitespace-only text runs that contain a line break.
    ///
    /// Such runs are the indentation of pretty-printed parts and are dropped
    /// by default. Whitespace-only runs without a line break (for example the
    /// space between two spans) are always kept.
    pub keep_layout_whitespace: bool,
    /// Deepest element nesting accepted before parsing fails.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_layout_whitespace: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Keep or drop layout whitespace.
    pub fn with_layout_whitespace(mut self, keep: bool) -> Self {
        self.keep_layout_whitespace = keep;
        self
    }

    fn keeps(&self, text: &str) -> bool {
        if self.keep_layout_whitespace || !text.chars().all(char::is_whitespace) {
            return true;
        }
        !text.contains(['\n', '\r'])
    }
}

/// A parsed markup part: the source text and its top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeTree {
    source: String,
    nodes: Vec<GenericNode>,
}

impl NodeTree {
    /// Parse markup with default options.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        MarkupParser::new(ParseOptions::default()).parse(source)
    }

    /// An empty tree, used for optional parts that are absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a tree from hand-made nodes that have no backing source.
    pub fn from_nodes(nodes: Vec<GenericNode>) -> Self {
        Self {
            source: String::new(),
            nodes,
        }
    }

    /// The source text the nodes were parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level nodes.
    pub fn nodes(&self) -> &[GenericNode] {
        &self.nodes
    }

    /// The first node with the given tag, searching depth-first.
    pub fn find(&self, tag: &str) -> Option<&GenericNode> {
        self.nodes.iter().find_map(|node| node.find(tag))
    }
}

/// Markup parser built on `quick-xml`.
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    options: ParseOptions,
}

/// Character data collected between two markup events.
#[derive(Default)]
struct PendingText {
    text: String,
    start: Option<usize>,
    end: usize,
}

impl PendingText {
    fn push(&mut self, start: usize, end: usize, text: &str) {
        self.start.get_or_insert(start);
        self.end = end;
        self.text.push_str(text);
    }

    fn take(&mut self, options: &ParseOptions) -> Option<GenericNode> {
        let start = self.start.take()?;
        let text = std::mem::take(&mut self.text);
        if text.is_empty() || !options.keeps(&text) {
            return None;
        }
        let mut node = GenericNode::text_node(text);
        node.span = Some(start..self.end);
        Some(node)
    }
}

impl MarkupParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a complete markup part.
    ///
    /// # Errors
    ///
    /// Returns `Error::XmlError` for malformed markup (mismatched or unclosed
    /// tags, broken attributes) and for elements nested deeper than
    /// [`ParseOptions::max_depth`].
    pub fn parse(&self, source: impl Into<String>) -> Result<NodeTree> {
        let source = source.into();
        let nodes = self.parse_nodes(&source)?;
        Ok(NodeTree { source, nodes })
    }

    fn parse_nodes(&self, source: &str) -> Result<Vec<GenericNode>> {
        let mut reader = Reader::from_str(source);
        let mut stack: Vec<GenericNode> = Vec::new();
        let mut roots: Vec<GenericNode> = Vec::new();
        let mut pending = PendingText::default();

        loop {
            let start = reader.buffer_position() as usize;
            let event = reader.read_event()?;
            let end = reader.buffer_position() as usize;

            match event {
                Event::Start(e) => {
                    self.flush_text(&mut pending, &mut stack, &mut roots);
                    self.check_depth(&stack, start)?;
                    let mut node = open_node(&e)?;
                    node.span = Some(start..start);
                    stack.push(node);
                },
                Event::Empty(e) => {
                    self.flush_text(&mut pending, &mut stack, &mut roots);
                    self.check_depth(&stack, start)?;
                    let mut node = open_node(&e)?;
                    node.span = Some(start..end);
                    attach(&mut stack, &mut roots, node);
                },
                Event::End(_) => {
                    self.flush_text(&mut pending, &mut stack, &mut roots);
                    if let Some(mut node) = stack.pop() {
                        if let Some(span) = node.span.as_mut() {
                            span.end = end;
                        }
                        attach(&mut stack, &mut roots, node);
                    }
                },
                Event::Text(e) => {
                    pending.push(start, end, &String::from_utf8_lossy(e.as_ref()));
                },
                Event::CData(e) => {
                    pending.push(start, end, &String::from_utf8_lossy(e.as_ref()));
                },
                Event::GeneralRef(e) => {
                    let entity = String::from_utf8_lossy(e.as_ref());
                    match resolve_entity(&entity) {
                        Some(c) => pending.push(start, end, c.encode_utf8(&mut [0u8; 4])),
                        None => pending.push(start, end, &format!("&{};", entity)),
                    }
                },
                Event::Eof => break,
                // Declarations, comments and processing instructions stay
                // inside the enclosing span but are not modelled.
                _ => {},
            }
        }

        if let Some(open) = stack.last() {
            return Err(Error::XmlError(format!(
                "Unclosed element <{}> at end of input",
                open.tag()
            )));
        }
        self.flush_text(&mut pending, &mut stack, &mut roots);

        Ok(roots)
    }

    fn check_depth(&self, stack: &[GenericNode], position: usize) -> Result<()> {
        if stack.len() >= self.options.max_depth {
            return Err(Error::XmlError(format!(
                "Element nesting exceeds {} levels at byte {}",
                self.options.max_depth, position
            )));
        }
        Ok(())
    }

    fn flush_text(
        &self,
        pending: &mut PendingText,
        stack: &mut Vec<GenericNode>,
        roots: &mut Vec<GenericNode>,
    ) {
        if let Some(node) = pending.take(&self.options) {
            attach(stack, roots, node);
        }
    }
}

fn attach(stack: &mut [GenericNode], roots: &mut Vec<GenericNode>, node: GenericNode) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(node),
        None => roots.push(node),
    }
}

fn open_node(e: &BytesStart<'_>) -> Result<GenericNode> {
    let name = e.name();
    let tag = std::str::from_utf8(name.as_ref())
        .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in tag name".to_string()))?;
    let mut node = GenericNode::new(tag);

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in attribute key".to_string()))?;
        let value = std::str::from_utf8(attr.value.as_ref())
            .map_err(|_| Error::InvalidFormat("Invalid UTF-8 in attribute value".to_string()))?;
        node.push_attribute(key, unescape_xml(value));
    }

    Ok(node)
}
