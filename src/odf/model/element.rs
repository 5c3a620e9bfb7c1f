//! Semantic element tree.

use crate::odf::catalog::ElementKind;
use crate::odf::constants::TEXT_PROPERTY;
use crate::odf::model::Property;
use serde::{Deserialize, Serialize};

/// One node of the typed output tree.
///
/// Recognized elements carry an empty `raw_tag` and `original_markup`.
/// Unrecognized elements keep their raw tag and the verbatim markup of the
/// source subtree, so nothing the catalog does not understand is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticElement {
    #[serde(default, skip_serializing_if = "ElementKind::is_unrecognized")]
    pub kind: ElementKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SemanticElement>,
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        with = "markup_base64"
    )]
    pub original_markup: String,
}

impl SemanticElement {
    /// Create an element of a recognized kind with no properties.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create a text element carrying a single `Text` property.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Text,
            properties: vec![Property::new(TEXT_PROPERTY, value)],
            ..Self::default()
        }
    }

    /// Create an unrecognized element that preserves its source markup.
    pub fn unrecognized(raw_tag: impl Into<String>, original_markup: impl Into<String>) -> Self {
        Self {
            raw_tag: raw_tag.into(),
            original_markup: original_markup.into(),
            ..Self::default()
        }
    }

    /// Whether the catalog resolved this element to a known kind.
    pub fn is_recognized(&self) -> bool {
        !self.kind.is_unrecognized()
    }

    /// The kind name, or the raw tag for unrecognized elements.
    pub fn label(&self) -> &str {
        if self.kind.is_unrecognized() {
            &self.raw_tag
        } else {
            self.kind.name()
        }
    }

    /// Value of the first property with the given name.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Value of the lifted or direct `Text` property.
    pub fn text_value(&self) -> Option<&str> {
        self.property(TEXT_PROPERTY)
    }

    /// Number of elements in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(SemanticElement::count).sum::<usize>()
    }

    /// Depth-first iterator over this element and all descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`SemanticElement::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a SemanticElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SemanticElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Base64 transport for preserved markup so it embeds safely in JSON.
mod markup_base64 {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(markup: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(markup.as_bytes()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = STANDARD.decode(encoded.as_bytes()).map_err(de::Error::custom)?;
        String::from_utf8(bytes).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_element() {
        let el = SemanticElement::text("hi");
        assert_eq!(el.kind, ElementKind::Text);
        assert_eq!(el.text_value(), Some("hi"));
        assert!(el.children.is_empty());
        assert!(el.original_markup.is_empty());
    }

    #[test]
    fn test_label() {
        assert_eq!(SemanticElement::new(ElementKind::Paragraph).label(), "Paragraph");
        assert_eq!(SemanticElement::unrecognized("x:y", "<x:y/>").label(), "x:y");
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let el = SemanticElement::new(ElementKind::LineBreak);
        assert_eq!(serde_json::to_string(&el).unwrap(), r#"{"kind":"LineBreak"}"#);
    }

    #[test]
    fn test_json_markup_is_base64() {
        let el = SemanticElement::unrecognized("x:y", "<x:y a=\"1\"/>");
        let json = serde_json::to_string(&el).unwrap();
        assert_eq!(
            json,
            r#"{"raw_tag":"x:y","original_markup":"PHg6eSBhPSIxIi8+"}"#
        );
        let back: SemanticElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }

    #[test]
    fn test_json_rejects_bad_base64() {
        let result = serde_json::from_str::<SemanticElement>(r#"{"original_markup":"***"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_descendants_pre_order() {
        let mut root = SemanticElement::new(ElementKind::List);
        let mut item = SemanticElement::new(ElementKind::ListItem);
        item.children.push(SemanticElement::new(ElementKind::Paragraph));
        root.children.push(item);
        root.children.push(SemanticElement::new(ElementKind::ListItem));

        let kinds: Vec<ElementKind> = root.descendants().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                ElementKind::List,
                ElementKind::ListItem,
                ElementKind::Paragraph,
                ElementKind::ListItem
            ]
        );
        assert_eq!(root.count(), 4);
    }
}
