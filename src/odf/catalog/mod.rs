//! Declarative definition catalog.
//!
//! The catalog maps raw tag names onto [`ElementKind`]s and raw attribute
//! names onto display property names. It is loaded once from a JSON
//! resource (bundled with the crate by default) and is read-only afterwards,
//! so a single instance can be shared by any number of transformations.
//!
//! # Resource format
//!
//! ```json
//! {
//!   "elements": [
//!     { "kind": "Paragraph", "tag": "text:p",
//!       "attributes": ["text:style-name"], "children": ["text:span"] }
//!   ],
//!   "attributes": [
//!     { "name": "StyleName", "attribute": "text:style-name" }
//!   ]
//! }
//! ```
//!
//! The per-element `attributes` and `children` lists are advisory metadata.
//! They are exposed to callers but never enforced during transformation.

pub mod kind;

pub use kind::ElementKind;

use crate::common::{Error, Result};
use crate::odf::constants::is_text_tag;
use log::debug;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The definition resource shipped with the crate.
const BUNDLED_DEFINITIONS: &str = include_str!("../../../resources/definitions.json");

static SHARED: OnceCell<Catalog> = OnceCell::new();

/// Catalog entry describing one element kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDefinition {
    /// Semantic kind name, parsed case-insensitively into [`ElementKind`].
    pub kind: String,
    /// Raw tag name matched exactly.
    pub tag: String,
    /// Raw attribute names the element may carry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Raw tag names of permitted children.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
}

impl ElementDefinition {
    /// The parsed kind, or `Unrecognized` when the name is not a known kind.
    pub fn element_kind(&self) -> ElementKind {
        ElementKind::from_name(&self.kind).unwrap_or_default()
    }

    /// Whether the attribute is listed as permitted.
    pub fn permits_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    /// Whether the child tag is listed as permitted.
    pub fn permits_child(&self, tag: &str) -> bool {
        self.children.iter().any(|c| c == tag)
    }
}

/// Catalog entry mapping a raw attribute name to a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Semantic property display name.
    pub name: String,
    /// Raw attribute name matched exactly.
    pub attribute: String,
}

/// Immutable tag and attribute mapping tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    elements: Vec<ElementDefinition>,
    #[serde(default)]
    attributes: Vec<AttributeDefinition>,
}

impl Catalog {
    /// Load the bundled definition resource.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the resource does not parse.
    pub fn load() -> Result<Self> {
        Self::from_json(BUNDLED_DEFINITIONS)
    }

    /// Process-wide bundled catalog, loaded on first access.
    pub fn shared() -> Result<&'static Catalog> {
        SHARED.get_or_try_init(Self::load)
    }

    /// Parse a catalog from a JSON definition resource.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` for malformed JSON or a resource that
    /// does not follow the definition schema.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("Malformed definition resource: {}", e)))?;
        debug!(
            "Loaded definition catalog: {} elements, {} attributes",
            catalog.elements.len(),
            catalog.attributes.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the file is missing, unreadable or
    /// malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Cannot read definition resource {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    /// A catalog with no definitions. Every tagged node resolves to
    /// `Unrecognized` against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from definition lists.
    pub fn from_definitions(
        elements: Vec<ElementDefinition>,
        attributes: Vec<AttributeDefinition>,
    ) -> Self {
        Self {
            elements,
            attributes,
        }
    }

    /// Element definitions in resource order.
    pub fn elements(&self) -> &[ElementDefinition] {
        &self.elements
    }

    /// Attribute definitions in resource order.
    pub fn attributes(&self) -> &[AttributeDefinition] {
        &self.attributes
    }

    /// First element definition whose raw tag equals `tag`.
    pub fn element(&self, tag: &str) -> Option<&ElementDefinition> {
        self.elements.iter().find(|def| def.tag == tag)
    }

    /// Resolve a raw tag name to its semantic kind.
    ///
    /// The empty tag and the text marker are always `Text`. Other tags are
    /// looked up exactly; the first matching definition wins and its kind
    /// name is parsed case-insensitively. Anything that does not resolve is
    /// `Unrecognized`.
    pub fn resolve_kind(&self, raw_tag: &str) -> ElementKind {
        if is_text_tag(raw_tag) {
            return ElementKind::Text;
        }
        self.element(raw_tag)
            .map(ElementDefinition::element_kind)
            .unwrap_or_default()
    }

    /// Display name for a raw attribute name, if the catalog maps it.
    pub fn display_name_for(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|def| def.attribute == attribute)
            .map(|def| def.name.as_str())
    }
}
