//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use vigor_core::{
    AttributeCatalog, AttributeDefinition, AttributeEffect, AttributeModifier, AttributeSet,
    AttributeTypeId, AttributeValue, EffectCatalog,
};

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredAttributeDef>().unwrap();
    models.define::<StoredAttributeSet>().unwrap();
    models.define::<StoredAttributeValue>().unwrap();
    models.define::<StoredEffect>().unwrap();
    models.define::<StoredModifier>().unwrap();
    models
});

/// Database store for persistent attribute and effect catalogs.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Save an attribute definition.
    pub fn save_definition(&self, def: &AttributeDefinition) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredAttributeDef::from_definition(def))?;
        rw.commit()?;
        Ok(())
    }

    /// Load an attribute definition by ID.
    pub fn load_definition(&self, id: &AttributeTypeId) -> Result<Option<AttributeDefinition>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredAttributeDef> = r.get().primary(id.as_str().to_string())?;
        Ok(stored.map(|s| s.to_definition()))
    }

    /// Save an attribute set.
    pub fn save_set(&self, set: &AttributeSet) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredAttributeSet::from_set(set))?;
        rw.commit()?;
        Ok(())
    }

    /// Load an attribute set by ID.
    pub fn load_set(&self, id: &str) -> Result<Option<AttributeSet>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredAttributeSet> = r.get().primary(id.to_string())?;
        Ok(stored.map(|s| s.to_set()))
    }

    /// Save an attribute value.
    pub fn save_value(&self, value: &AttributeValue) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredAttributeValue::from_value(value))?;
        rw.commit()?;
        Ok(())
    }

    /// Load a value by its (set, attribute type) pair.
    pub fn load_value(
        &self,
        set_id: &str,
        attribute_type: &AttributeTypeId,
    ) -> Result<Option<AttributeValue>> {
        let r = self.db.r_transaction()?;
        let key = StoredAttributeValue::key_for(set_id, attribute_type);
        let stored: Option<StoredAttributeValue> = r.get().primary(key)?;
        Ok(stored.map(|s| s.to_value()))
    }

    /// Delete a value; absent entries are not an error.
    pub fn delete_value(&self, set_id: &str, attribute_type: &AttributeTypeId) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let key = StoredAttributeValue::key_for(set_id, attribute_type);
        let stored: Option<StoredAttributeValue> = rw.get().primary(key)?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Save an effect definition.
    pub fn save_effect(&self, effect: &AttributeEffect) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredEffect::from_effect(effect))?;
        rw.commit()?;
        Ok(())
    }

    /// Load an effect by ID.
    pub fn load_effect(&self, id: &str) -> Result<Option<AttributeEffect>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredEffect> = r.get().primary(id.to_string())?;
        Ok(stored.map(|s| s.to_effect()))
    }

    /// Save a modifier with its insertion sequence.
    pub fn save_modifier(&self, modifier: &AttributeModifier, seq: u32) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredModifier::from_modifier(modifier, seq))?;
        rw.commit()?;
        Ok(())
    }

    /// Delete a modifier; absent entries are not an error.
    pub fn delete_modifier(&self, effect_id: &str, modifier_id: &str) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let key = StoredModifier::key_for(effect_id, modifier_id);
        let stored: Option<StoredModifier> = rw.get().primary(key)?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Save a complete attribute catalog in one transaction.
    pub fn save_catalog(&self, catalog: &AttributeCatalog) -> Result<()> {
        let rw = self.db.rw_transaction()?;

        for def in catalog.list_definitions() {
            rw.upsert(StoredAttributeDef::from_definition(def))?;
        }
        for set in catalog.list_sets() {
            rw.upsert(StoredAttributeSet::from_set(set))?;
            for value in catalog.list_values(&set.id) {
                rw.upsert(StoredAttributeValue::from_value(value))?;
            }
        }

        rw.commit()?;
        Ok(())
    }

    /// Load a complete attribute catalog.
    ///
    /// Records are replayed through the validating catalog operations, so a
    /// database holding inconsistent records surfaces a `Catalog` error
    /// instead of producing a catalog that violates its invariants.
    pub fn load_catalog(&self) -> Result<AttributeCatalog> {
        let mut catalog = AttributeCatalog::new();

        for def in self.all_definitions()? {
            catalog.define_attribute(def)?;
        }
        for set in self.all_sets()? {
            let set_id = set.id.clone();
            catalog.create_set(set)?;
            for value in self.values_for_set(&set_id)? {
                catalog.upsert_value(value)?;
            }
        }

        Ok(catalog)
    }

    /// Save a complete effect catalog in one transaction.
    pub fn save_effects(&self, effects: &EffectCatalog) -> Result<()> {
        let rw = self.db.rw_transaction()?;

        for effect in effects.list_effects() {
            rw.upsert(StoredEffect::from_effect(effect))?;
            for (seq, modifier) in effects.raw_modifiers(&effect.id).enumerate() {
                rw.upsert(StoredModifier::from_modifier(modifier, seq as u32))?;
            }
        }

        rw.commit()?;
        Ok(())
    }

    /// Load a complete effect catalog, validating attribute types against
    /// the given attribute catalog.
    pub fn load_effects(&self, attributes: &AttributeCatalog) -> Result<EffectCatalog> {
        let mut effects = EffectCatalog::new();

        for effect in self.all_effects()? {
            let effect_id = effect.id.clone();
            effects.define_effect(effect)?;
            for modifier in self.modifiers_for_effect(&effect_id)? {
                effects.add_modifier(attributes, modifier)?;
            }
        }

        Ok(effects)
    }

    /// Clear all data.
    pub fn clear(&self) -> Result<()> {
        let rw = self.db.rw_transaction()?;

        macro_rules! clear_model {
            ($model:ty) => {{
                let keys: Vec<String> = {
                    let scan = rw.scan().primary::<$model>()?;
                    let iter = scan.all()?;
                    let records: std::result::Result<Vec<$model>, _> = iter.collect();
                    let records = records.map_err(|e| Error::Database(e.to_string()))?;
                    records.into_iter().map(|r| r.primary_key()).collect()
                };
                for key in keys {
                    if let Some(record) = rw.get().primary::<$model>(key)? {
                        rw.remove(record)?;
                    }
                }
            }};
        }

        clear_model!(StoredAttributeDef);
        clear_model!(StoredAttributeSet);
        clear_model!(StoredAttributeValue);
        clear_model!(StoredEffect);
        clear_model!(StoredModifier);

        rw.commit()?;
        Ok(())
    }
}

trait PrimaryKeyed {
    fn primary_key(&self) -> String;
}

impl PrimaryKeyed for StoredAttributeDef {
    fn primary_key(&self) -> String {
        self.id.clone()
    }
}

impl PrimaryKeyed for StoredAttributeSet {
    fn primary_key(&self) -> String {
        self.id.clone()
    }
}

impl PrimaryKeyed for StoredAttributeValue {
    fn primary_key(&self) -> String {
        self.key.clone()
    }
}

impl PrimaryKeyed for StoredEffect {
    fn primary_key(&self) -> String {
        self.id.clone()
    }
}

impl PrimaryKeyed for StoredModifier {
    fn primary_key(&self) -> String {
        self.key.clone()
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
