//! Named property values attached to semantic elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(name, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    /// Create a new property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Property {
    /// Renders `Name Words = value`, splitting CamelCase names into words.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", separate_words(&self.name), self.value)
    }
}

/// Split a CamelCase identifier into space separated words.
///
/// A boundary is placed before an uppercase letter that follows a lowercase
/// letter or digit, and before the last capital of an acronym that is
/// followed by a lowercase letter. Names that are not CamelCase (raw
/// attribute names such as `text:style-name`) come back unchanged.
///
/// ```
/// use odtree::odf::model::separate_words;
/// assert_eq!(separate_words("StyleName"), "Style Name");
/// assert_eq!(separate_words("XMLId"), "XML Id");
/// assert_eq!(separate_words("text:style-name"), "text:style-name");
/// ```
pub fn separate_words(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}
