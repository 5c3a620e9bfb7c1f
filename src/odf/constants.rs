//! ODF constants: MIME types, package part paths and the well-known
//! container tags that root each document partition.

use phf::{Map, phf_map};

// ============================================================================
// MIME TYPES
// ============================================================================

/// MIME type for OpenDocument Text (.odt)
pub const ODF_TEXT: &str = "application/vnd.oasis.opendocument.text";

/// MIME type for OpenDocument Text Template (.ott)
pub const ODF_TEXT_TEMPLATE: &str = "application/vnd.oasis.opendocument.text-template";

/// MIME type for OpenDocument Master (.odm)
pub const ODF_MASTER: &str = "application/vnd.oasis.opendocument.text-master";

/// MIME type for OpenDocument Web (.oth)
pub const ODF_WEB: &str = "application/vnd.oasis.opendocument.text-web";

/// File extension to MIME type mapping for the text family
pub static ODF_EXTENSIONS: Map<&'static str, &'static str> = phf_map! {
    "odt" => ODF_TEXT,
    "ott" => ODF_TEXT_TEMPLATE,
    "odm" => ODF_MASTER,
    "oth" => ODF_WEB,
};

// ============================================================================
// STANDARD ODF PARTS PATHS
// ============================================================================

/// Path to the mimetype member
pub const ODF_MIMETYPE: &str = "mimetype";

/// Path to content.xml (main document content)
pub const ODF_CONTENT: &str = "content.xml";

/// Path to styles.xml (document styles)
pub const ODF_STYLES: &str = "styles.xml";

/// Path to settings.xml (application settings)
pub const ODF_SETTINGS: &str = "settings.xml";

// ============================================================================
// PARTITION ROOTS
// ============================================================================

/// Body text root in content.xml
pub const BODY_ROOT: &str = "office:text";

/// Font face declarations in content.xml
pub const FONT_FACES_ROOT: &str = "office:font-face-decls";

/// Automatic styles, found in both content.xml and styles.xml
pub const AUTOMATIC_STYLES_ROOT: &str = "office:automatic-styles";

/// Common styles in styles.xml
pub const BASE_STYLES_ROOT: &str = "office:styles";

/// Master pages in styles.xml
pub const MASTER_STYLES_ROOT: &str = "office:master-styles";

/// First settings item set in settings.xml
pub const SETTINGS_ROOT: &str = "config:config-item-set";

// ============================================================================
// BODY ROOT ATTRIBUTES
// ============================================================================

/// Whether the body contains soft page break markers
pub const ATTR_USE_SOFT_PAGE_BREAKS: &str = "text:use-soft-page-breaks";

/// Whether the body is a global (master document) text
pub const ATTR_GLOBAL: &str = "text:global";

/// Tag name that marks a node as plain text, besides the empty tag
pub const TEXT_NODE_MARKER: &str = "text";

/// Name of the synthetic property carrying lifted text
pub const TEXT_PROPERTY: &str = "Text";

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Get MIME type from file extension
///
/// # Examples
///
/// ```
/// use odtree::odf::constants::get_mime_type_from_extension;
///
/// assert_eq!(
///     get_mime_type_from_extension("odm"),
///     Some("application/vnd.oasis.opendocument.text-master")
/// );
/// ```
#[inline]
pub fn get_mime_type_from_extension(extension: &str) -> Option<&'static str> {
    ODF_EXTENSIONS.get(extension).copied()
}

/// Check whether a MIME type belongs to the OpenDocument text family.
pub fn is_text_mime_type(mime_type: &str) -> bool {
    let mime_type = mime_type.trim();
    ODF_EXTENSIONS
        .values()
        .any(|known| known.eq_ignore_ascii_case(mime_type))
}

/// Check whether a MIME type denotes a master document, ignoring case.
#[inline]
pub fn is_master_mime_type(mime_type: &str) -> bool {
    mime_type.trim().eq_ignore_ascii_case(ODF_MASTER)
}

/// Check whether a tag name denotes a plain text node.
#[inline]
pub fn is_text_tag(tag: &str) -> bool {
    tag.is_empty() || tag == TEXT_NODE_MARKER
}
