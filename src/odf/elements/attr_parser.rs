//! Fail-safe parsing of scalar attribute values.
//!
//! Malformed scalar attributes never abort a transformation: callers get the
//! strict [`parse_bool`] when they want to know, and [`parse_bool_or`] when
//! a default is the right answer.

use crate::common::{Error, Result};
use phf::{Set, phf_set};

/// Accepted spellings of `true`, compared ASCII case-insensitively.
static TRUE_VALUES: Set<&'static str> = phf_set! {
    "true", "yes", "on", "1",
};

/// Accepted spellings of `false`, compared ASCII case-insensitively.
static FALSE_VALUES: Set<&'static str> = phf_set! {
    "false", "no", "off", "0",
};

/// Parse a boolean attribute value.
///
/// # Examples
///
/// ```
/// # use odtree::odf::elements::attr_parser::parse_bool;
/// assert_eq!(parse_bool("true").unwrap(), true);
/// assert_eq!(parse_bool(" FALSE ").unwrap(), false);
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool> {
    let value = value.trim().to_ascii_lowercase();
    if TRUE_VALUES.contains(value.as_str()) {
        Ok(true)
    } else if FALSE_VALUES.contains(value.as_str()) {
        Ok(false)
    } else {
        Err(Error::InvalidFormat(format!("Invalid boolean value: {}", value)))
    }
}

/// Parse an optional boolean attribute value, returning `default` when it
/// is absent or unparseable.
#[inline]
pub fn parse_bool_or(value: Option<&str>, default: bool) -> bool {
    value.and_then(|v| parse_bool(v).ok()).unwrap_or(default)
}
