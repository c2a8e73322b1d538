//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use vigor_core::{AttributeDefinition, AttributeEffect, AttributeModifier, AttributeSet, AttributeValue};

impl Store {
    /// Get all values owned by a set, in stored order.
    pub fn values_for_set(&self, set_id: &str) -> Result<Vec<AttributeValue>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredAttributeValue>(StoredAttributeValueKey::set_id)?;
        let iter = scan.start_with(set_id)?;
        let values: std::result::Result<Vec<StoredAttributeValue>, _> = iter.collect();
        let values = values.map_err(|e| Error::Database(e.to_string()))?;
        // start_with is a prefix match; keep exact owners only
        Ok(values
            .into_iter()
            .filter(|v| v.set_id == set_id)
            .map(|v| v.to_value())
            .collect())
    }

    /// Get all modifiers owned by an effect, in insertion order.
    pub fn modifiers_for_effect(&self, effect_id: &str) -> Result<Vec<AttributeModifier>> {
        let r = self.db.r_transaction()?;
        let scan = r
            .scan()
            .secondary::<StoredModifier>(StoredModifierKey::effect_id)?;
        let iter = scan.start_with(effect_id)?;
        let modifiers: std::result::Result<Vec<StoredModifier>, _> = iter.collect();
        let modifiers = modifiers.map_err(|e| Error::Database(e.to_string()))?;
        let mut modifiers: Vec<StoredModifier> = modifiers
            .into_iter()
            .filter(|m| m.effect_id == effect_id)
            .collect();
        modifiers.sort_by_key(|m| m.seq);
        Ok(modifiers.into_iter().map(|m| m.to_modifier()).collect())
    }

    /// Get all attribute definitions.
    pub fn all_definitions(&self) -> Result<Vec<AttributeDefinition>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredAttributeDef>()?;
        let iter = scan.all()?;
        let defs: std::result::Result<Vec<StoredAttributeDef>, _> = iter.collect();
        let defs = defs.map_err(|e| Error::Database(e.to_string()))?;
        Ok(defs.into_iter().map(|d| d.to_definition()).collect())
    }

    /// Get all attribute sets.
    pub fn all_sets(&self) -> Result<Vec<AttributeSet>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredAttributeSet>()?;
        let iter = scan.all()?;
        let sets: std::result::Result<Vec<StoredAttributeSet>, _> = iter.collect();
        let sets = sets.map_err(|e| Error::Database(e.to_string()))?;
        Ok(sets.into_iter().map(|s| s.to_set()).collect())
    }

    /// Get all effect definitions.
    pub fn all_effects(&self) -> Result<Vec<AttributeEffect>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredEffect>()?;
        let iter = scan.all()?;
        let effects: std::result::Result<Vec<StoredEffect>, _> = iter.collect();
        let effects = effects.map_err(|e| Error::Database(e.to_string()))?;
        Ok(effects.into_iter().map(|e| e.to_effect()).collect())
    }
}
