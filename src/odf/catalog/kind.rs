//! Semantic element kinds.
//!
//! [`ElementKind`] is the closed set of element categories the catalog can
//! map raw tags onto, plus [`ElementKind::Text`] for character data and
//! [`ElementKind::Unrecognized`] for everything else. Kind names are parsed
//! through a compile-time perfect hash table keyed by the lowercase name, so
//! parsing is case-insensitive and needs no runtime reflection.

use phf::{Map, phf_map};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// KIND ENUMERATION
// ============================================================================

/// Semantic kind of a transformed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// No catalog mapping matched
    #[default]
    Unrecognized,
    /// Character data
    Text,

    // Text content
    /// `text:p`
    Paragraph,
    /// `text:h`
    Heading,
    /// `text:span`
    Span,
    /// `text:a`
    Hyperlink,
    /// `text:s`
    Space,
    /// `text:tab`
    Tab,
    /// `text:line-break`
    LineBreak,
    /// `text:soft-page-break`
    SoftPageBreak,
    /// `text:list`
    List,
    /// `text:list-item`
    ListItem,
    /// `text:list-header`
    ListHeader,
    /// `text:section`
    Section,
    /// `text:bookmark`
    Bookmark,
    /// `text:bookmark-start`
    BookmarkStart,
    /// `text:bookmark-end`
    BookmarkEnd,
    /// `text:reference-mark`
    ReferenceMark,
    /// `text:note`
    Note,
    /// `text:note-citation`
    NoteCitation,
    /// `text:note-body`
    NoteBody,
    /// `office:annotation`
    Annotation,
    /// `office:annotation-end`
    AnnotationEnd,
    /// `dc:creator`
    Creator,
    /// `dc:date`
    CreationDate,

    // Fields and declarations
    /// `text:sequence-decls`
    SequenceDecls,
    /// `text:sequence-decl`
    SequenceDecl,
    /// `text:sequence`
    Sequence,
    /// `text:variable-decls`
    VariableDecls,
    /// `text:variable-decl`
    VariableDecl,
    /// `text:user-field-decls`
    UserFieldDecls,
    /// `text:user-field-decl`
    UserFieldDecl,
    /// `text:page-number`
    PageNumber,
    /// `text:page-count`
    PageCount,
    /// `text:date`
    Date,
    /// `text:time`
    Time,
    /// `text:title`
    Title,
    /// `text:subject`
    Subject,
    /// `text:author-name`
    AuthorName,
    /// `text:chapter`
    Chapter,

    // Indexes
    /// `text:table-of-content`
    TableOfContent,
    /// `text:table-of-content-source`
    TableOfContentSource,
    /// `text:index-title-template`
    IndexTitleTemplate,
    /// `text:table-of-content-entry-template`
    TableOfContentEntryTemplate,
    /// `text:index-body`
    IndexBody,
    /// `text:index-title`
    IndexTitle,

    // Tracked changes
    /// `text:tracked-changes`
    TrackedChanges,
    /// `text:changed-region`
    ChangedRegion,
    /// `text:insertion`
    Insertion,
    /// `text:deletion`
    Deletion,
    /// `text:format-change`
    FormatChange,
    /// `office:change-info`
    ChangeInfo,
    /// `text:change-start`
    ChangeStart,
    /// `text:change-end`
    ChangeEnd,

    // Tables
    /// `table:table`
    Table,
    /// `table:table-column`
    TableColumn,
    /// `table:table-header-rows`
    TableHeaderRows,
    /// `table:table-row`
    TableRow,
    /// `table:table-cell`
    TableCell,
    /// `table:covered-table-cell`
    CoveredTableCell,

    // Drawing
    /// `draw:frame`
    Frame,
    /// `draw:image`
    Image,
    /// `draw:text-box`
    TextBox,
    /// `office:forms`
    Forms,

    // Fonts and styles
    /// `style:font-face`
    FontFace,
    /// `style:style`
    Style,
    /// `style:default-style`
    DefaultStyle,
    /// `style:paragraph-properties`
    ParagraphProperties,
    /// `style:text-properties`
    TextProperties,
    /// `style:table-properties`
    TableProperties,
    /// `style:table-column-properties`
    TableColumnProperties,
    /// `style:table-row-properties`
    TableRowProperties,
    /// `style:table-cell-properties`
    TableCellProperties,
    /// `style:graphic-properties`
    GraphicProperties,
    /// `style:section-properties`
    SectionProperties,
    /// `style:columns`
    Columns,
    /// `style:column`
    Column,
    /// `style:tab-stops`
    TabStops,
    /// `style:tab-stop`
    TabStop,
    /// `style:background-image`
    BackgroundImage,

    // Page layout
    /// `style:page-layout`
    PageLayout,
    /// `style:default-page-layout`
    DefaultPageLayout,
    /// `style:page-layout-properties`
    PageLayoutProperties,
    /// `style:header-style`
    HeaderStyle,
    /// `style:footer-style`
    FooterStyle,
    /// `style:header-footer-properties`
    HeaderFooterProperties,
    /// `style:footnote-sep`
    FootnoteSep,
    /// `style:master-page`
    MasterPage,
    /// `style:header`
    Header,
    /// `style:footer`
    Footer,
    /// `style:header-left`
    HeaderLeft,
    /// `style:footer-left`
    FooterLeft,

    // List and outline styles
    /// `text:list-style`
    ListStyle,
    /// `text:list-level-style-number`
    ListLevelStyleNumber,
    /// `text:list-level-style-bullet`
    ListLevelStyleBullet,
    /// `style:list-level-properties`
    ListLevelProperties,
    /// `style:list-level-label-alignment`
    ListLevelLabelAlignment,
    /// `text:outline-style`
    OutlineStyle,
    /// `text:outline-level-style`
    OutlineLevelStyle,
    /// `text:notes-configuration`
    NotesConfiguration,
    /// `text:linenumbering-configuration`
    LinenumberingConfiguration,

    // Settings
    /// `config:config-item-set`
    ConfigItemSet,
    /// `config:config-item`
    ConfigItem,
    /// `config:config-item-map-indexed`
    ConfigItemMapIndexed,
    /// `config:config-item-map-named`
    ConfigItemMapNamed,
    /// `config:config-item-map-entry`
    ConfigItemMapEntry,
}

// ============================================================================
// NAME TABLE
// ============================================================================

/// Lowercase kind name to kind.
static KIND_NAMES: Map<&'static str, ElementKind> = phf_map! {
    "unrecognized" => ElementKind::Unrecognized,
    "text" => ElementKind::Text,

    // Text content
    "paragraph" => ElementKind::Paragraph,
    "heading" => ElementKind::Heading,
    "span" => ElementKind::Span,
    "hyperlink" => ElementKind::Hyperlink,
    "space" => ElementKind::Space,
    "tab" => ElementKind::Tab,
    "linebreak" => ElementKind::LineBreak,
    "softpagebreak" => ElementKind::SoftPageBreak,
    "list" => ElementKind::List,
    "listitem" => ElementKind::ListItem,
    "listheader" => ElementKind::ListHeader,
    "section" => ElementKind::Section,
    "bookmark" => ElementKind::Bookmark,
    "bookmarkstart" => ElementKind::BookmarkStart,
    "bookmarkend" => ElementKind::BookmarkEnd,
    "referencemark" => ElementKind::ReferenceMark,
    "note" => ElementKind::Note,
    "notecitation" => ElementKind::NoteCitation,
    "notebody" => ElementKind::NoteBody,
    "annotation" => ElementKind::Annotation,
    "annotationend" => ElementKind::AnnotationEnd,
    "creator" => ElementKind::Creator,
    "creationdate" => ElementKind::CreationDate,

    // Fields and declarations
    "sequencedecls" => ElementKind::SequenceDecls,
    "sequencedecl" => ElementKind::SequenceDecl,
    "sequence" => ElementKind::Sequence,
    "variabledecls" => ElementKind::VariableDecls,
    "variabledecl" => ElementKind::VariableDecl,
    "userfielddecls" => ElementKind::UserFieldDecls,
    "userfielddecl" => ElementKind::UserFieldDecl,
    "pagenumber" => ElementKind::PageNumber,
    "pagecount" => ElementKind::PageCount,
    "date" => ElementKind::Date,
    "time" => ElementKind::Time,
    "title" => ElementKind::Title,
    "subject" => ElementKind::Subject,
    "authorname" => ElementKind::AuthorName,
    "chapter" => ElementKind::Chapter,

    // Indexes
    "tableofcontent" => ElementKind::TableOfContent,
    "tableofcontentsource" => ElementKind::TableOfContentSource,
    "indextitletemplate" => ElementKind::IndexTitleTemplate,
    "tableofcontententrytemplate" => ElementKind::TableOfContentEntryTemplate,
    "indexbody" => ElementKind::IndexBody,
    "indextitle" => ElementKind::IndexTitle,

    // Tracked changes
    "trackedchanges" => ElementKind::TrackedChanges,
    "changedregion" => ElementKind::ChangedRegion,
    "insertion" => ElementKind::Insertion,
    "deletion" => ElementKind::Deletion,
    "formatchange" => ElementKind::FormatChange,
    "changeinfo" => ElementKind::ChangeInfo,
    "changestart" => ElementKind::ChangeStart,
    "changeend" => ElementKind::ChangeEnd,

    // Tables
    "table" => ElementKind::Table,
    "tablecolumn" => ElementKind::TableColumn,
    "tableheaderrows" => ElementKind::TableHeaderRows,
    "tablerow" => ElementKind::TableRow,
    "tablecell" => ElementKind::TableCell,
    "coveredtablecell" => ElementKind::CoveredTableCell,

    // Drawing
    "frame" => ElementKind::Frame,
    "image" => ElementKind::Image,
    "textbox" => ElementKind::TextBox,
    "forms" => ElementKind::Forms,

    // Fonts and styles
    "fontface" => ElementKind::FontFace,
    "style" => ElementKind::Style,
    "defaultstyle" => ElementKind::DefaultStyle,
    "paragraphproperties" => ElementKind::ParagraphProperties,
    "textproperties" => ElementKind::TextProperties,
    "tableproperties" => ElementKind::TableProperties,
    "tablecolumnproperties" => ElementKind::TableColumnProperties,
    "tablerowproperties" => ElementKind::TableRowProperties,
    "tablecellproperties" => ElementKind::TableCellProperties,
    "graphicproperties" => ElementKind::GraphicProperties,
    "sectionproperties" => ElementKind::SectionProperties,
    "columns" => ElementKind::Columns,
    "column" => ElementKind::Column,
    "tabstops" => ElementKind::TabStops,
    "tabstop" => ElementKind::TabStop,
    "backgroundimage" => ElementKind::BackgroundImage,

    // Page layout
    "pagelayout" => ElementKind::PageLayout,
    "defaultpagelayout" => ElementKind::DefaultPageLayout,
    "pagelayoutproperties" => ElementKind::PageLayoutProperties,
    "headerstyle" => ElementKind::HeaderStyle,
    "footerstyle" => ElementKind::FooterStyle,
    "headerfooterproperties" => ElementKind::HeaderFooterProperties,
    "footnotesep" => ElementKind::FootnoteSep,
    "masterpage" => ElementKind::MasterPage,
    "header" => ElementKind::Header,
    "footer" => ElementKind::Footer,
    "headerleft" => ElementKind::HeaderLeft,
    "footerleft" => ElementKind::FooterLeft,

    // List and outline styles
    "liststyle" => ElementKind::ListStyle,
    "listlevelstylenumber" => ElementKind::ListLevelStyleNumber,
    "listlevelstylebullet" => ElementKind::ListLevelStyleBullet,
    "listlevelproperties" => ElementKind::ListLevelProperties,
    "listlevellabelalignment" => ElementKind::ListLevelLabelAlignment,
    "outlinestyle" => ElementKind::OutlineStyle,
    "outlinelevelstyle" => ElementKind::OutlineLevelStyle,
    "notesconfiguration" => ElementKind::NotesConfiguration,
    "linenumberingconfiguration" => ElementKind::LinenumberingConfiguration,

    // Settings
    "configitemset" => ElementKind::ConfigItemSet,
    "configitem" => ElementKind::ConfigItem,
    "configitemmapindexed" => ElementKind::ConfigItemMapIndexed,
    "configitemmapnamed" => ElementKind::ConfigItemMapNamed,
    "configitemmapentry" => ElementKind::ConfigItemMapEntry,
};

impl ElementKind {
    /// Canonical display name of the kind.
    pub const fn name(&self) -> &'static str {
        match self {
            ElementKind::Unrecognized => "Unrecognized",
            ElementKind::Text => "Text",
            ElementKind::Paragraph => "Paragraph",
            ElementKind::Heading => "Heading",
            ElementKind::Span => "Span",
            ElementKind::Hyperlink => "Hyperlink",
            ElementKind::Space => "Space",
            ElementKind::Tab => "Tab",
            ElementKind::LineBreak => "LineBreak",
            ElementKind::SoftPageBreak => "SoftPageBreak",
            ElementKind::List => "List",
            ElementKind::ListItem => "ListItem",
            ElementKind::ListHeader => "ListHeader",
            ElementKind::Section => "Section",
            ElementKind::Bookmark => "Bookmark",
            ElementKind::BookmarkStart => "BookmarkStart",
            ElementKind::BookmarkEnd => "BookmarkEnd",
            ElementKind::ReferenceMark => "ReferenceMark",
            ElementKind::Note => "Note",
            ElementKind::NoteCitation => "NoteCitation",
            ElementKind::NoteBody => "NoteBody",
            ElementKind::Annotation => "Annotation",
            ElementKind::AnnotationEnd => "AnnotationEnd",
            ElementKind::Creator => "Creator",
            ElementKind::CreationDate => "CreationDate",
            ElementKind::SequenceDecls => "SequenceDecls",
            ElementKind::SequenceDecl => "SequenceDecl",
            ElementKind::Sequence => "Sequence",
            ElementKind::VariableDecls => "VariableDecls",
            ElementKind::VariableDecl => "VariableDecl",
            ElementKind::UserFieldDecls => "UserFieldDecls",
            ElementKind::UserFieldDecl => "UserFieldDecl",
            ElementKind::PageNumber => "PageNumber",
            ElementKind::PageCount => "PageCount",
            ElementKind::Date => "Date",
            ElementKind::Time => "Time",
            ElementKind::Title => "Title",
            ElementKind::Subject => "Subject",
            ElementKind::AuthorName => "AuthorName",
            ElementKind::Chapter => "Chapter",
            ElementKind::TableOfContent => "TableOfContent",
            ElementKind::TableOfContentSource => "TableOfContentSource",
            ElementKind::IndexTitleTemplate => "IndexTitleTemplate",
            ElementKind::TableOfContentEntryTemplate => "TableOfContentEntryTemplate",
            ElementKind::IndexBody => "IndexBody",
            ElementKind::IndexTitle => "IndexTitle",
            ElementKind::TrackedChanges => "TrackedChanges",
            ElementKind::ChangedRegion => "ChangedRegion",
            ElementKind::Insertion => "Insertion",
            ElementKind::Deletion => "Deletion",
            ElementKind::FormatChange => "FormatChange",
            ElementKind::ChangeInfo => "ChangeInfo",
            ElementKind::ChangeStart => "ChangeStart",
            ElementKind::ChangeEnd => "ChangeEnd",
            ElementKind::Table => "Table",
            ElementKind::TableColumn => "TableColumn",
            ElementKind::TableHeaderRows => "TableHeaderRows",
            ElementKind::TableRow => "TableRow",
            ElementKind::TableCell => "TableCell",
            ElementKind::CoveredTableCell => "CoveredTableCell",
            ElementKind::Frame => "Frame",
            ElementKind::Image => "Image",
            ElementKind::TextBox => "TextBox",
            ElementKind::Forms => "Forms",
            ElementKind::FontFace => "FontFace",
            ElementKind::Style => "Style",
            ElementKind::DefaultStyle => "DefaultStyle",
            ElementKind::ParagraphProperties => "ParagraphProperties",
            ElementKind::TextProperties => "TextProperties",
            ElementKind::TableProperties => "TableProperties",
            ElementKind::TableColumnProperties => "TableColumnProperties",
            ElementKind::TableRowProperties => "TableRowProperties",
            ElementKind::TableCellProperties => "TableCellProperties",
            ElementKind::GraphicProperties => "GraphicProperties",
            ElementKind::SectionProperties => "SectionProperties",
            ElementKind::Columns => "Columns",
            ElementKind::Column => "Column",
            ElementKind::TabStops => "TabStops",
            ElementKind::TabStop => "TabStop",
            ElementKind::BackgroundImage => "BackgroundImage",
            ElementKind::PageLayout => "PageLayout",
            ElementKind::DefaultPageLayout => "DefaultPageLayout",
            ElementKind::PageLayoutProperties => "PageLayoutProperties",
            ElementKind::HeaderStyle => "HeaderStyle",
            ElementKind::FooterStyle => "FooterStyle",
            ElementKind::HeaderFooterProperties => "HeaderFooterProperties",
            ElementKind::FootnoteSep => "FootnoteSep",
            ElementKind::MasterPage => "MasterPage",
            ElementKind::Header => "Header",
            ElementKind::Footer => "Footer",
            ElementKind::HeaderLeft => "HeaderLeft",
            ElementKind::FooterLeft => "FooterLeft",
            ElementKind::ListStyle => "ListStyle",
            ElementKind::ListLevelStyleNumber => "ListLevelStyleNumber",
            ElementKind::ListLevelStyleBullet => "ListLevelStyleBullet",
            ElementKind::ListLevelProperties => "ListLevelProperties",
            ElementKind::ListLevelLabelAlignment => "ListLevelLabelAlignment",
            ElementKind::OutlineStyle => "OutlineStyle",
            ElementKind::OutlineLevelStyle => "OutlineLevelStyle",
            ElementKind::NotesConfiguration => "NotesConfiguration",
            ElementKind::LinenumberingConfiguration => "LinenumberingConfiguration",
            ElementKind::ConfigItemSet => "ConfigItemSet",
            ElementKind::ConfigItem => "ConfigItem",
            ElementKind::ConfigItemMapIndexed => "ConfigItemMapIndexed",
            ElementKind::ConfigItemMapNamed => "ConfigItemMapNamed",
            ElementKind::ConfigItemMapEntry => "ConfigItemMapEntry",
        }
    }

    /// Parse a kind name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        KIND_NAMES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// Whether the kind is the catch-all for unmapped tags.
    #[inline]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, ElementKind::Unrecognized)
    }

    /// Whether the kind denotes character data.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, ElementKind::Text)
    }

    /// Iterate over every kind in the name table.
    pub fn all() -> impl Iterator<Item = ElementKind> {
        KIND_NAMES.values().copied()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a kind name is not in the name table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown element kind: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ElementKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name).unwrap_or_default())
    }
}
