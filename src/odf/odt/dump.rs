//! Indented text dump of a document's element trees.

use crate::odf::model::SemanticElement;
use crate::odf::odt::document::{Document, Partition};
use std::fmt;

/// Options controlling [`Document::dump_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpOptions {
    /// Print the preserved source markup of unrecognized elements
    pub include_markup: bool,
    /// Omit section headers of partitions with no elements
    pub skip_empty_sections: bool,
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markup(mut self, include_markup: bool) -> Self {
        self.include_markup = include_markup;
        self
    }

    pub fn with_skip_empty_sections(mut self, skip: bool) -> Self {
        self.skip_empty_sections = skip;
        self
    }
}

/// Display adapter rendering a document dump.
pub struct DocumentDump<'a> {
    document: &'a Document,
    options: DumpOptions,
}

impl fmt::Display for DocumentDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.document.body.is_empty() {
            return Ok(());
        }

        for partition in Partition::ALL {
            let elements = self.document.partition(partition);
            if elements.is_empty() && self.options.skip_empty_sections {
                continue;
            }
            writeln!(f, "*** {} ***", partition.title())?;
            dump_elements(f, elements, 0, &self.options)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write each element with its properties, followed by its children one
/// level deeper.
///
/// The label sits at `indent`, `Properties:` at `indent + 2` and every
/// property at `indent + 3`.
pub fn dump_elements<W: fmt::Write + ?Sized>(
    out: &mut W,
    elements: &[SemanticElement],
    indent: usize,
    options: &DumpOptions,
) -> fmt::Result {
    for element in elements {
        writeln!(out, "{:indent$}{}", "", element.label(), indent = indent)?;
        writeln!(out, "{:width$}Properties:", "", width = indent + 2)?;
        for property in &element.properties {
            writeln!(out, "{:width$}{}", "", property, width = indent + 3)?;
        }
        if options.include_markup && !element.original_markup.is_empty() {
            writeln!(out, "{:width$}Markup:", "", width = indent + 2)?;
            for line in element.original_markup.lines() {
                writeln!(out, "{:width$}{}", "", line, width = indent + 3)?;
            }
        }
        writeln!(out)?;
        dump_elements(out, &element.children, indent + 1, options)?;
    }
    Ok(())
}

impl Document {
    /// Render all partitions as indented text.
    ///
    /// A document with an empty body dumps to an empty string, whatever its
    /// styles and settings hold.
    pub fn dump(&self) -> String {
        self.dump_with(&DumpOptions::default())
    }

    /// Render all partitions with explicit options.
    pub fn dump_with(&self, options: &DumpOptions) -> String {
        self.display_dump(*options).to_string()
    }

    /// Borrow a [`fmt::Display`] adapter for streaming the dump.
    pub fn display_dump(&self, options: DumpOptions) -> DocumentDump<'_> {
        DocumentDump {
            document: self,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::catalog::ElementKind;
    use crate::odf::model::Property;

    fn sample() -> Document {
        let mut paragraph = SemanticElement::new(ElementKind::Paragraph);
        paragraph.properties.push(Property::new("StyleName", "P1"));
        paragraph.children.push(SemanticElement::text("Hi"));

        let mut doc = Document::new();
        doc.body.push(paragraph);
        doc.settings
            .push(SemanticElement::unrecognized("x:y", "<x:y>\n<x:z/>\n</x:y>"));
        doc
    }

    #[test]
    fn test_dump_layout() {
        let dump = sample().dump();
        let expected = "\
*** Elements ***
Paragraph
  Properties:
   Style Name = P1

 Text
   Properties:
    Text = Hi


*** Font Faces ***

*** Automatic Base Styles ***

*** Automatic Content Styles ***

*** Base Styles ***

*** Master Styles ***

*** Settings ***
x:y
  Properties:


";
        assert_eq!(dump, expected);
    }

    #[test]
    fn test_skip_empty_sections() {
        let dump = sample().dump_with(&DumpOptions::new().with_skip_empty_sections(true));
        assert!(dump.starts_with("*** Elements ***\n"));
        assert!(dump.contains("*** Settings ***\n"));
        assert!(!dump.contains("Font Faces"));
        assert!(!dump.contains("Master Styles"));
    }

    #[test]
    fn test_include_markup() {
        let dump = sample().dump_with(
            &DumpOptions::new()
                .with_markup(true)
                .with_skip_empty_sections(true),
        );
        assert!(dump.contains("x:y\n  Properties:\n  Markup:\n   <x:y>\n   <x:z/>\n   </x:y>\n\n"));
        assert!(!sample().dump().contains("Markup:"));
    }

    #[test]
    fn test_empty_document_dumps_nothing() {
        assert_eq!(Document::new().dump(), "");
    }

    #[test]
    fn test_empty_body_dumps_nothing() {
        let mut doc = Document::new();
        doc.base_styles.push(SemanticElement::new(ElementKind::Style));
        doc.settings.push(SemanticElement::new(ElementKind::ConfigItem));
        assert_eq!(doc.dump(), "");
        assert_eq!(
            doc.dump_with(&DumpOptions::new().with_skip_empty_sections(true)),
            ""
        );

        doc.body.push(SemanticElement::text("x"));
        assert!(doc.dump().contains("*** Base Styles ***\nStyle\n"));
    }

    #[test]
    fn test_dump_elements_nested_indent() {
        let mut outer = SemanticElement::new(ElementKind::List);
        let mut item = SemanticElement::new(ElementKind::ListItem);
        item.children.push(SemanticElement::new(ElementKind::Paragraph));
        outer.children.push(item);

        let mut out = String::new();
        dump_elements(&mut out, &[outer], 2, &DumpOptions::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  List");
        assert_eq!(lines[1], "    Properties:");
        assert_eq!(lines[3], "   ListItem");
        assert_eq!(lines[6], "    Paragraph");
        assert_eq!(lines[7], "      Properties:");
    }
}
