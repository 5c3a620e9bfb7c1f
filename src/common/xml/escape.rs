//! XML escaping and entity resolution.
//!
//! Escaping is used when a hand-built node has no source span and has to be
//! serialized from its fields. Unescaping is used for attribute values, which
//! the tokenizer hands over raw.

use aho_corasick::AhoCorasick;
use memchr::memchr;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automatons are built only once, thread-safe
static ATTRIBUTE_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\""])
        .expect("Failed to build XML attribute escaper")
});

static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">"])
        .expect("Failed to build XML text escaper")
});

/// Escape a value for use inside a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use odtree::common::xml::escape_attribute;
/// assert_eq!(escape_attribute("a & \"b\""), "a &amp; &quot;b&quot;");
/// ```
#[inline]
pub fn escape_attribute(s: &str) -> String {
    ATTRIBUTE_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;"])
}

/// Escape character data.
///
/// # Examples
///
/// ```
/// use odtree::common::xml::escape_text;
/// assert_eq!(escape_text("<tag>\"hi\"</tag>"), "&lt;tag&gt;\"hi\"&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;"])
}

/// Resolve the name of an entity reference (without `&` and `;`).
///
/// Handles the five predefined XML entities and decimal / hexadecimal
/// character references. Anything else yields `None`.
pub fn resolve_entity(entity: &str) -> Option<char> {
    match entity {
        "apos" => return Some('\''),
        "quot" => return Some('"'),
        "lt" => return Some('<'),
        "gt" => return Some('>'),
        "amp" => return Some('&'),
        _ => {},
    }

    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }

    None
}

/// Unescape entity references in raw XML text.
///
/// Unknown or malformed references are left unchanged. Borrows the input
/// when it contains no `&`.
///
/// # Examples
///
/// ```
/// use odtree::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("&lt;a &amp; b&gt;"), "<a & b>");
/// assert_eq!(unescape_xml("&#65;&#x42;"), "AB");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// assert_eq!(unescape_xml("&amp"), "&amp");
/// ```
pub fn unescape_xml(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let Some(first) = memchr(b'&', bytes) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(&s[..first]);
    let mut pos = first;

    while pos < bytes.len() {
        if bytes[pos] != b'&' {
            let next = memchr(b'&', &bytes[pos..]).map_or(bytes.len(), |i| pos + i);
            out.push_str(&s[pos..next]);
            pos = next;
            continue;
        }

        let resolved = memchr(b';', &bytes[pos + 1..]).and_then(|len| {
            let end = pos + 1 + len;
            resolve_entity(&s[pos + 1..end]).map(|c| (c, end + 1))
        });
        match resolved {
            Some((c, next)) => {
                out.push(c);
                pos = next;
            },
            None => {
                out.push('&');
                pos += 1;
            },
        }
    }

    Cow::Owned(out)
}
