//! OpenDocument Text document aggregate.

use crate::common::{Error, Result};
use crate::odf::catalog::Catalog;
use crate::odf::constants::{
    ODF_CONTENT, ODF_SETTINGS, ODF_STYLES, get_mime_type_from_extension, is_text_mime_type,
};
use crate::odf::core::{DirectoryPackage, OdfPackage, Package, XmlPart};
use crate::odf::elements::{NodeTree, ParseOptions};
use crate::odf::model::SemanticElement;
use crate::odf::odt::assembler::DocumentAssembler;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// Lifecycle state of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentState {
    /// Freshly constructed, nothing assembled yet
    #[default]
    Empty,
    /// Populated by assembly or deserialization
    Assembled,
}

impl DocumentState {
    fn assembled() -> Self {
        DocumentState::Assembled
    }
}

/// The independent element collections of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Body,
    FontFaces,
    AutomaticBaseStyles,
    AutomaticContentStyles,
    BaseStyles,
    MasterStyles,
    Settings,
}

impl Partition {
    /// Every partition, in dump order.
    pub const ALL: [Partition; 7] = [
        Partition::Body,
        Partition::FontFaces,
        Partition::AutomaticBaseStyles,
        Partition::AutomaticContentStyles,
        Partition::BaseStyles,
        Partition::MasterStyles,
        Partition::Settings,
    ];

    /// Section title used in dumps and logs.
    pub const fn title(&self) -> &'static str {
        match self {
            Partition::Body => "Elements",
            Partition::FontFaces => "Font Faces",
            Partition::AutomaticBaseStyles => "Automatic Base Styles",
            Partition::AutomaticContentStyles => "Automatic Content Styles",
            Partition::BaseStyles => "Base Styles",
            Partition::MasterStyles => "Master Styles",
            Partition::Settings => "Settings",
        }
    }
}

/// An OpenDocument text document transformed into semantic element trees.
///
/// # Examples
///
/// ```no_run
/// use odtree::{Catalog, Document};
///
/// # fn main() -> odtree::Result<()> {
/// let catalog = Catalog::load()?;
/// let doc = Document::open("document.odt", &catalog)?;
///
/// for element in &doc.body {
///     println!("{}", element.label());
/// }
/// print!("{}", doc.dump());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// MIME type from the package, trimmed
    #[serde(default)]
    pub mime_type: String,
    /// Whether the body root declares soft page breaks
    #[serde(default)]
    pub use_soft_page_breaks: bool,
    /// Whether the body is global text (master document)
    #[serde(default)]
    pub is_global_text: bool,
    /// Body content from content.xml
    #[serde(default)]
    pub body: Vec<SemanticElement>,
    /// Font face declarations from content.xml
    #[serde(default)]
    pub font_faces: Vec<SemanticElement>,
    /// Automatic styles from styles.xml
    #[serde(default)]
    pub automatic_base_styles: Vec<SemanticElement>,
    /// Automatic styles from content.xml
    #[serde(default)]
    pub automatic_content_styles: Vec<SemanticElement>,
    /// Common styles from styles.xml
    #[serde(default)]
    pub base_styles: Vec<SemanticElement>,
    /// Master pages from styles.xml
    #[serde(default)]
    pub master_styles: Vec<SemanticElement>,
    /// First settings item set from settings.xml
    #[serde(default)]
    pub settings: Vec<SemanticElement>,
    #[serde(skip, default = "DocumentState::assembled")]
    pub(crate) state: DocumentState,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DocumentState {
        self.state
    }

    /// Open an ODT document from a `.odt` file or an extracted package
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` before any parsing if `path` does not exist,
    /// and package or XML errors if the document cannot be read.
    pub fn open<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<Self> {
        Self::open_with_options(path, catalog, &ParseOptions::default())
    }

    /// Open an ODT document with explicit parse options.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        catalog: &Catalog,
        options: &ParseOptions,
    ) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        debug!("Opening {}", path.display());
        if path.is_dir() {
            let package = DirectoryPackage::open(path)?;
            Self::from_package(&package, catalog, options)
        } else {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase)
                .unwrap_or_default();
            if get_mime_type_from_extension(&extension).is_none() {
                debug!("{} has no OpenDocument text extension", path.display());
            }
            let package = Package::open(path)?;
            Self::from_package(&package, catalog, options)
        }
    }

    /// Create a Document from the bytes of a `.odt` file.
    pub fn from_bytes(bytes: Vec<u8>, catalog: &Catalog, options: &ParseOptions) -> Result<Self> {
        let package = Package::from_reader(Cursor::new(bytes))?;
        Self::from_package(&package, catalog, options)
    }

    /// Read and assemble a document from any package source.
    ///
    /// `content.xml` is required; `styles.xml` and `settings.xml` may be
    /// absent, which leaves their partitions empty.
    pub fn from_package<P: OdfPackage + ?Sized>(
        package: &P,
        catalog: &Catalog,
        options: &ParseOptions,
    ) -> Result<Self> {
        let mime_type = package.mimetype();
        if !is_text_mime_type(mime_type) {
            warn!("Unexpected MIME type for a text document: {}", mime_type);
        }

        let content_bytes = package.get_file(ODF_CONTENT)?;
        let content = XmlPart::from_bytes(&content_bytes)?.parse(options)?;
        let styles = read_optional_part(package, ODF_STYLES, options)?;
        let settings = read_optional_part(package, ODF_SETTINGS, options)?;

        Ok(DocumentAssembler::new(catalog).assemble(&content, &styles, &settings, mime_type))
    }

    /// Elements of one partition.
    pub fn partition(&self, partition: Partition) -> &[SemanticElement] {
        match partition {
            Partition::Body => &self.body,
            Partition::FontFaces => &self.font_faces,
            Partition::AutomaticBaseStyles => &self.automatic_base_styles,
            Partition::AutomaticContentStyles => &self.automatic_content_styles,
            Partition::BaseStyles => &self.base_styles,
            Partition::MasterStyles => &self.master_styles,
            Partition::Settings => &self.settings,
        }
    }

    /// Total number of elements across all partitions.
    pub fn element_count(&self) -> usize {
        Partition::ALL
            .iter()
            .flat_map(|p| self.partition(*p))
            .map(SemanticElement::count)
            .sum()
    }

    /// Serialize the document to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the document to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a document previously exported with [`Document::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn read_optional_part<P: OdfPackage + ?Sized>(
    package: &P,
    path: &str,
    options: &ParseOptions,
) -> Result<NodeTree> {
    match package.get_optional_file(path)? {
        Some(bytes) => XmlPart::from_bytes(&bytes)?.parse(options),
        None => {
            warn!("Package has no {}, leaving its partitions empty", path);
            Ok(NodeTree::empty())
        },
    }
}
