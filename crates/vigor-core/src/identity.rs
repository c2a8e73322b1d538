//! Identifier types for attribute definitions
//!
//! Attribute types use dotted hierarchical identifiers (e.g. `"health.max"`,
//! `"weapon.damage.base"`). The helpers here derive compact display keys
//! from those identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an attribute definition
///
/// Uses a string-based ID for easy reference from catalogs and documents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTypeId(pub String);

impl AttributeTypeId {
    /// Create a new attribute type ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final segment of the dotted identifier
    pub fn suffix(&self) -> &str {
        suffix_of(&self.0)
    }

    /// The identifier with a leading `category.` prefix removed
    pub fn strip_category(&self, category: &str) -> &str {
        strip_category_prefix(&self.0, category)
    }

    /// The portion before the final segment, if the identifier is dotted
    pub fn category_prefix(&self) -> Option<&str> {
        prefix_of(&self.0)
    }
}

impl fmt::Display for AttributeTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AttributeTypeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeTypeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Final segment of a dotted identifier, or the whole identifier if undotted
pub fn suffix_of(id: &str) -> &str {
    match id.rfind('.') {
        Some(pos) => &id[pos + 1..],
        None => id,
    }
}

/// Everything before the last separator, or `None` if the identifier is undotted
pub fn prefix_of(id: &str) -> Option<&str> {
    id.rfind('.').map(|pos| &id[..pos])
}

/// Strip a `category.` prefix from an identifier
///
/// Returns the identifier unchanged when it does not start with the prefix.
pub fn strip_category_prefix<'a>(id: &'a str, category: &str) -> &'a str {
    match id.strip_prefix(category) {
        Some(rest) => rest.strip_prefix('.').unwrap_or(id),
        None => id,
    }
}
