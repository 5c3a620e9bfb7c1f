//! Document assembly from the three parsed package parts.

use crate::odf::catalog::Catalog;
use crate::odf::constants::{
    ATTR_GLOBAL, ATTR_USE_SOFT_PAGE_BREAKS, AUTOMATIC_STYLES_ROOT, BASE_STYLES_ROOT, BODY_ROOT,
    FONT_FACES_ROOT, MASTER_STYLES_ROOT, SETTINGS_ROOT, is_master_mime_type,
};
use crate::odf::elements::NodeTree;
use crate::odf::model::SemanticElement;
use crate::odf::odt::document::{Document, DocumentState, Partition};
use crate::odf::transform::TreeBuilder;
use log::debug;

/// Builds a [`Document`] from content, styles and settings trees.
///
/// Assembly is a pure function of its inputs: every partition is located
/// and transformed independently, and a missing partition root leaves that
/// collection empty.
#[derive(Debug, Clone, Copy)]
pub struct DocumentAssembler<'c> {
    catalog: &'c Catalog,
}

impl<'c> DocumentAssembler<'c> {
    /// Create an assembler over the given catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Assemble a document.
    pub fn assemble(
        &self,
        content: &NodeTree,
        styles: &NodeTree,
        settings: &NodeTree,
        mime_type: &str,
    ) -> Document {
        let mut document = Document::new();
        document.mime_type = mime_type.trim().to_string();

        if let Some(body) = content.find(BODY_ROOT) {
            document.use_soft_page_breaks = body.get_bool_attribute(ATTR_USE_SOFT_PAGE_BREAKS, false);
            document.is_global_text =
                body.get_bool_attribute(ATTR_GLOBAL, false) || is_master_mime_type(mime_type);
            document.body = TreeBuilder::for_tree(self.catalog, content).build(body.children());
        }

        document.font_faces = self.partition(content, FONT_FACES_ROOT);
        document.automatic_content_styles = self.partition(content, AUTOMATIC_STYLES_ROOT);
        document.automatic_base_styles = self.partition(styles, AUTOMATIC_STYLES_ROOT);
        document.base_styles = self.partition(styles, BASE_STYLES_ROOT);
        document.master_styles = self.partition(styles, MASTER_STYLES_ROOT);
        document.settings = self.partition(settings, SETTINGS_ROOT);
        document.state = DocumentState::Assembled;

        for partition in Partition::ALL {
            debug!(
                "{}: {} top-level elements",
                partition.title(),
                document.partition(partition).len()
            );
        }

        document
    }

    /// Transform the children of the first `root` node in `tree`.
    fn partition(&self, tree: &NodeTree, root: &str) -> Vec<SemanticElement> {
        tree.find(root)
            .map(|node| TreeBuilder::for_tree(self.catalog, tree).build(node.children()))
            .unwrap_or_default()
    }
}
