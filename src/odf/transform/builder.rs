//! Generic node tree to semantic element tree transformation.
//!
//! Rules, applied to each node in order:
//!
//! - Text nodes become `Text` elements with a single `Text` property and are
//!   not descended into.
//! - Tagged nodes resolve their kind through the catalog. Unrecognized nodes
//!   keep their raw tag and the verbatim markup of their subtree, and are
//!   still given properties and children like any other node.
//! - Attributes become properties through the [`PropertyMapper`].
//! - A non-empty leading text child is lifted into a trailing `Text`
//!   property instead of becoming a child element. A childless node with its
//!   own direct text gets the same property.

use crate::odf::catalog::Catalog;
use crate::odf::constants::TEXT_PROPERTY;
use crate::odf::elements::{GenericNode, NodeTree};
use crate::odf::model::{Property, SemanticElement};
use crate::odf::transform::PropertyMapper;
use log::trace;

/// Recursive tree transformation over a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'c, 's> {
    catalog: &'c Catalog,
    mapper: PropertyMapper<'c>,
    source: Option<&'s str>,
}

impl<'c, 's> TreeBuilder<'c, 's> {
    /// Create a builder for hand-built nodes. Unrecognized nodes are
    /// serialized from their fields.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            mapper: PropertyMapper::new(catalog),
            source: None,
        }
    }

    /// Create a builder for nodes parsed from `tree`. Unrecognized nodes
    /// keep the exact source text of their subtree.
    pub fn for_tree(catalog: &'c Catalog, tree: &'s NodeTree) -> Self {
        Self::new(catalog).with_source(tree.source())
    }

    /// Use `source` as the text that node spans point into.
    pub fn with_source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    /// The catalog used for kind and property resolution.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Transform a sequence of sibling nodes, preserving order.
    pub fn build(&self, nodes: &[GenericNode]) -> Vec<SemanticElement> {
        nodes.iter().map(|node| self.build_node(node)).collect()
    }

    /// Transform a single node and its subtree.
    pub fn build_node(&self, node: &GenericNode) -> SemanticElement {
        if node.is_text() {
            return SemanticElement::text(node.text());
        }

        let kind = self.catalog.resolve_kind(node.tag());
        let mut element = SemanticElement::new(kind);
        if kind.is_unrecognized() {
            trace!("Unrecognized tag <{}>, keeping original markup", node.tag());
            element.raw_tag = node.tag().to_string();
            element.original_markup = node.outer_markup(self.source).into_owned();
        }

        element.properties = self.mapper.map_attributes(node);

        let children = node.children();
        let remaining = match children.first() {
            Some(first) if first.is_text() && !first.text().is_empty() => {
                element
                    .properties
                    .push(Property::new(TEXT_PROPERTY, first.text()));
                &children[1..]
            },
            None if !node.text().is_empty() => {
                element
                    .properties
                    .push(Property::new(TEXT_PROPERTY, node.text()));
                children
            },
            _ => children,
        };

        element.children = self.build(remaining);
        element
    }
}
