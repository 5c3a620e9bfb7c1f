//! Package-level tests.
//!
//! Builds `.odt` packages on the fly, reads them back through the public API
//! and checks the assembled partitions, the JSON export and the dump.

use std::io::Write;
use std::path::{Path, PathBuf};

use odtree::{Catalog, Document, DocumentState, DumpOptions, ElementKind, Error, ParseOptions};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const MIMETYPE: &str = "application/vnd.oasis.opendocument.text";

const CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0">
  <office:font-face-decls>
    <style:font-face style:name="Liberation Sans" svg:font-family="'Liberation Sans'"/>
  </office:font-face-decls>
  <office:automatic-styles>
    <style:style style:name="P1" style:family="paragraph">
      <style:paragraph-properties fo:text-align="end"/>
    </style:style>
  </office:automatic-styles>
  <office:body>
    <office:text text:use-soft-page-breaks="YES">
      <text:h text:style-name="Heading_20_1" text:outline-level="1">Fish &amp; Chips</text:h>
      <text:p text:style-name="P1">Visit <text:a xlink:href="https://example.org" xlink:type="simple">the site</text:a> today</text:p>
      <text:list text:style-name="L1">
        <text:list-item>
          <text:p>First</text:p>
        </text:list-item>
      </text:list>
      <loext:custom a="1"><loext:inner>kept</loext:inner></loext:custom>
    </office:text>
  </office:body>
</office:document-content>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles>
  <office:styles>
    <style:style style:name="Standard" style:family="paragraph"/>
  </office:styles>
  <office:automatic-styles>
    <style:page-layout style:name="pm1"/>
  </office:automatic-styles>
  <office:master-styles>
    <style:master-page style:name="Standard" style:page-layout-name="pm1"/>
  </office:master-styles>
</office:document-styles>"#;

const SETTINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-settings>
  <office:settings>
    <config:config-item-set config:name="ooo:view-settings">
      <config:config-item config:name="ViewAreaTop" config:type="long">0</config:config-item>
    </config:config-item-set>
    <config:config-item-set config:name="ooo:configuration-settings">
      <config:config-item config:name="PrinterName" config:type="string"/>
    </config:config-item-set>
  </office:settings>
</office:document-settings>"#;

fn write_odt(dir: &Path, name: &str, members: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (member, body) in members {
        writer
            .start_file(*member, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(body).unwrap();
    }
    writer.finish().unwrap();
    path
}

fn full_package(dir: &Path) -> PathBuf {
    write_odt(
        dir,
        "sample.odt",
        &[
            ("mimetype", MIMETYPE.as_bytes()),
            ("content.xml", CONTENT.as_bytes()),
            ("styles.xml", STYLES.as_bytes()),
            ("settings.xml", SETTINGS.as_bytes()),
        ],
    )
}

// ============================================================================
// Reading
// ============================================================================

#[test]
fn test_open_full_package() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    assert_eq!(doc.state(), DocumentState::Assembled);
    assert_eq!(doc.mime_type, MIMETYPE);
    assert!(doc.use_soft_page_breaks);
    assert!(!doc.is_global_text);

    let kinds: Vec<ElementKind> = doc.body.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Heading,
            ElementKind::Paragraph,
            ElementKind::List,
            ElementKind::Unrecognized
        ]
    );

    let heading = &doc.body[0];
    assert_eq!(heading.property("StyleName"), Some("Heading_20_1"));
    assert_eq!(heading.property("OutlineLevel"), Some("1"));
    assert_eq!(heading.text_value(), Some("Fish & Chips"));

    let paragraph = &doc.body[1];
    assert_eq!(paragraph.text_value(), Some("Visit "));
    assert_eq!(paragraph.children.len(), 2);
    assert_eq!(paragraph.children[0].kind, ElementKind::Hyperlink);
    assert_eq!(paragraph.children[0].property("Reference"), Some("https://example.org"));
    assert_eq!(paragraph.children[0].text_value(), Some("the site"));
    assert_eq!(paragraph.children[1].kind, ElementKind::Text);
    assert_eq!(paragraph.children[1].text_value(), Some(" today"));

    let item = &doc.body[2].children[0];
    assert_eq!(item.kind, ElementKind::ListItem);
    assert_eq!(item.children[0].text_value(), Some("First"));

    assert_eq!(doc.font_faces.len(), 1);
    assert_eq!(doc.automatic_content_styles.len(), 1);
    assert_eq!(doc.automatic_base_styles.len(), 1);
    assert_eq!(doc.base_styles.len(), 1);
    assert_eq!(doc.master_styles.len(), 1);

    // Only the first item set is kept
    assert_eq!(doc.settings.len(), 1);
    assert_eq!(doc.settings[0].property("Name"), Some("ViewAreaTop"));
}

#[test]
fn test_unrecognized_element_keeps_source_markup() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    let custom = &doc.body[3];
    assert!(!custom.is_recognized());
    assert_eq!(custom.raw_tag, "loext:custom");
    assert_eq!(
        custom.original_markup,
        r#"<loext:custom a="1"><loext:inner>kept</loext:inner></loext:custom>"#
    );
}

#[test]
fn test_missing_document_is_not_found() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load().unwrap();
    let err = Document::open(dir.path().join("absent.odt"), &catalog).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_styles_and_settings_are_optional() {
    let dir = TempDir::new().unwrap();
    let path = write_odt(
        dir.path(),
        "bare.odt",
        &[
            ("mimetype", MIMETYPE.as_bytes()),
            ("content.xml", CONTENT.as_bytes()),
        ],
    );
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    assert_eq!(doc.body.len(), 4);
    assert!(doc.base_styles.is_empty());
    assert!(doc.automatic_base_styles.is_empty());
    assert!(doc.master_styles.is_empty());
    assert!(doc.settings.is_empty());
}

#[test]
fn test_content_is_required() {
    let dir = TempDir::new().unwrap();
    let path = write_odt(
        dir.path(),
        "empty.odt",
        &[("mimetype", MIMETYPE.as_bytes()), ("styles.xml", STYLES.as_bytes())],
    );
    let catalog = Catalog::load().unwrap();
    assert!(matches!(
        Document::open(&path, &catalog),
        Err(Error::ComponentNotFound(_))
    ));
}

#[test]
fn test_malformed_content_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_odt(
        dir.path(),
        "broken.odt",
        &[
            ("mimetype", MIMETYPE.as_bytes()),
            ("content.xml", "<office:document-content><office:body>".as_bytes()),
        ],
    );
    let catalog = Catalog::load().unwrap();
    assert!(Document::open(&path, &catalog).is_err());
}

#[test]
fn test_runaway_nesting_is_an_error() {
    let depth = 50_000;
    let content = format!(
        "<office:body><office:text>{}{}</office:text></office:body>",
        "<text:span>".repeat(depth),
        "</text:span>".repeat(depth)
    );
    let dir = TempDir::new().unwrap();
    let path = write_odt(
        dir.path(),
        "deep.odt",
        &[
            ("mimetype", MIMETYPE.as_bytes()),
            ("content.xml", content.as_bytes()),
        ],
    );
    let catalog = Catalog::load().unwrap();
    assert!(matches!(
        Document::open(&path, &catalog),
        Err(Error::XmlError(_))
    ));
}

#[test]
fn test_master_document_is_global_text() {
    let dir = TempDir::new().unwrap();
    let path = write_odt(
        dir.path(),
        "master.odm",
        &[
            ("mimetype", "application/vnd.oasis.opendocument.text-master".as_bytes()),
            ("content.xml", "<office:body><office:text/></office:body>".as_bytes()),
        ],
    );
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();
    assert!(doc.is_global_text);
}

#[test]
fn test_from_bytes_matches_open() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();

    let opened = Document::open(&path, &catalog).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let loaded = Document::from_bytes(bytes, &catalog, &ParseOptions::default()).unwrap();
    assert_eq!(opened, loaded);
}

#[test]
fn test_extracted_directory_matches_zip() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let extracted = dir.path().join("extracted");
    std::fs::create_dir(&extracted).unwrap();
    std::fs::write(extracted.join("mimetype"), MIMETYPE).unwrap();
    std::fs::write(extracted.join("content.xml"), CONTENT).unwrap();
    std::fs::write(extracted.join("styles.xml"), STYLES).unwrap();
    std::fs::write(extracted.join("settings.xml"), SETTINGS).unwrap();

    let catalog = Catalog::load().unwrap();
    let zipped = Document::open(&path, &catalog).unwrap();
    let unzipped = Document::open(&extracted, &catalog).unwrap();
    assert_eq!(zipped, unzipped);
}

#[test]
fn test_layout_whitespace_option() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();

    let compact = Document::open(&path, &catalog).unwrap();
    let options = ParseOptions::new().with_layout_whitespace(true);
    let layout = Document::open_with_options(&path, &catalog, &options).unwrap();

    assert!(layout.body.len() > compact.body.len());
    assert!(
        layout
            .body
            .iter()
            .filter(|e| e.kind == ElementKind::Text)
            .all(|e| e.text_value().is_some_and(|t| t.trim().is_empty()))
    );
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let defs = dir.path().join("defs.json");
    std::fs::write(
        &defs,
        r#"{
            "elements": [{"kind": "Heading", "tag": "text:h"}],
            "attributes": [{"name": "Level", "attribute": "text:outline-level"}]
        }"#,
    )
    .unwrap();

    let catalog = Catalog::from_path(&defs).unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    assert_eq!(doc.body[0].kind, ElementKind::Heading);
    assert_eq!(doc.body[0].property("Level"), Some("1"));
    assert_eq!(doc.body[0].property("StyleName"), None);
    assert!(!doc.body[1].is_recognized());
    assert_eq!(doc.body[1].raw_tag, "text:p");
}

#[test]
fn test_malformed_catalog_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let defs = dir.path().join("defs.json");
    std::fs::write(&defs, "{ not json").unwrap();
    let err = Catalog::from_path(&defs).unwrap_err();
    assert!(err.is_configuration());
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    let json = doc.to_json_pretty().unwrap();
    let back = Document::from_json(&json).unwrap();
    assert_eq!(back, doc);

    let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(value["mime_type"], MIMETYPE);
    assert_eq!(value["use_soft_page_breaks"], true);
    assert_eq!(value["body"][0]["kind"], "Heading");
    assert_eq!(value["body"][3]["raw_tag"], "loext:custom");
}

#[test]
fn test_dump_output() {
    let dir = TempDir::new().unwrap();
    let path = full_package(dir.path());
    let catalog = Catalog::load().unwrap();
    let doc = Document::open(&path, &catalog).unwrap();

    let dump = doc.dump();
    assert!(dump.starts_with("*** Elements ***\nHeading\n  Properties:\n   Style Name = Heading_20_1\n"));
    for title in [
        "*** Font Faces ***",
        "*** Automatic Base Styles ***",
        "*** Automatic Content Styles ***",
        "*** Base Styles ***",
        "*** Master Styles ***",
        "*** Settings ***",
    ] {
        assert!(dump.contains(title), "missing {title}");
    }
    assert!(dump.contains("\n   Outline Level = 1\n"));
    assert!(dump.contains("\n Hyperlink\n   Properties:\n    Reference = https://example.org\n"));

    let with_markup = doc.dump_with(&DumpOptions::new().with_markup(true));
    assert!(with_markup.contains("<loext:inner>kept</loext:inner>"));
}
