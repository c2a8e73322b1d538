//! Attribute catalog
//!
//! Owns attribute definitions and sets of bounded values. All mutation goes
//! through validating operations; a failed operation never writes partially.

use crate::attribute::{AttributeDefinition, AttributeSet, AttributeValue};
use crate::error::{Error, Result};
use crate::identity::AttributeTypeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Catalog of attribute definitions and attribute sets
///
/// Uses IndexMap so iteration follows insertion order (deterministic
/// serialization and stable display lists).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeCatalog {
    /// Attribute definitions by id
    definitions: IndexMap<AttributeTypeId, AttributeDefinition>,
    /// Attribute sets by id
    sets: IndexMap<String, AttributeSet>,
    /// Values keyed by owning set id, then attribute type
    values: IndexMap<String, IndexMap<AttributeTypeId, AttributeValue>>,
}

impl AttributeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new attribute definition
    ///
    /// Fails with `DuplicateIdentifier` if the id is already defined.
    pub fn define_attribute(&mut self, definition: AttributeDefinition) -> Result<()> {
        if self.definitions.contains_key(&definition.id) {
            return Err(Error::DuplicateIdentifier(definition.id.to_string()));
        }
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    /// Create a new, empty attribute set
    ///
    /// Fails with `DuplicateIdentifier` if the set id already exists.
    pub fn create_set(&mut self, set: AttributeSet) -> Result<()> {
        if self.sets.contains_key(&set.id) {
            return Err(Error::DuplicateIdentifier(set.id.clone()));
        }
        self.values.insert(set.id.clone(), IndexMap::new());
        self.sets.insert(set.id.clone(), set);
        Ok(())
    }

    /// Insert or replace a value in its owning set
    ///
    /// Validates that the set exists, the referenced attribute type is
    /// defined, and the base value sits within its bounds. One value per
    /// (set, attribute type) pair; an existing entry is replaced.
    pub fn upsert_value(&mut self, value: AttributeValue) -> Result<()> {
        if !self.sets.contains_key(&value.set_id) {
            return Err(Error::UnknownSet(value.set_id.clone()));
        }
        if !self.definitions.contains_key(&value.attribute_type) {
            return Err(Error::UnknownAttributeType(value.attribute_type.to_string()));
        }
        value.validate_bounds()?;

        let entries = self.values.entry(value.set_id.clone()).or_default();
        entries.insert(value.attribute_type.clone(), value);
        Ok(())
    }

    /// Remove a value from a set; absent entries are not an error
    pub fn remove_value(&mut self, set_id: &str, attribute_type: &AttributeTypeId) {
        if let Some(entries) = self.values.get_mut(set_id) {
            entries.shift_remove(attribute_type);
        }
    }

    /// Remove a set and every value it owns; absent sets are not an error
    pub fn remove_set(&mut self, set_id: &str) {
        self.sets.shift_remove(set_id);
        self.values.shift_remove(set_id);
    }

    /// Look up an attribute definition
    pub fn lookup_definition(&self, id: &AttributeTypeId) -> Option<&AttributeDefinition> {
        self.definitions.get(id)
    }

    /// Whether an attribute type is defined
    pub fn has_definition(&self, id: &AttributeTypeId) -> bool {
        self.definitions.contains_key(id)
    }

    /// All attribute definitions, in insertion order
    pub fn list_definitions(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.definitions.values()
    }

    /// Look up an attribute set
    pub fn lookup_set(&self, id: &str) -> Option<&AttributeSet> {
        self.sets.get(id)
    }

    /// All attribute sets, in insertion order
    pub fn list_sets(&self) -> impl Iterator<Item = &AttributeSet> {
        self.sets.values()
    }

    /// Values owned by a set, in insertion order
    ///
    /// Returns an empty iterator for unknown set ids.
    pub fn list_values(&self, set_id: &str) -> impl Iterator<Item = &AttributeValue> {
        self.values.get(set_id).into_iter().flat_map(|m| m.values())
    }

    /// One value by (set, attribute type)
    pub fn lookup_value(
        &self,
        set_id: &str,
        attribute_type: &AttributeTypeId,
    ) -> Option<&AttributeValue> {
        self.values.get(set_id)?.get(attribute_type)
    }
}
