//! Record models for database storage.
//!
//! One record type per catalog entity. Values and modifiers carry a
//! composite primary key plus a secondary key on the owning id so a whole
//! set or effect can be enumerated in one scan.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use vigor_core::{
    AttributeDefinition, AttributeEffect, AttributeModifier, AttributeSet, AttributeValue,
    AttributeTypeId, ModifierOp,
};

/// Stored attribute definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredAttributeDef {
    /// Primary key - attribute type ID.
    #[primary_key]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Default value.
    pub default_value: f64,
}

impl StoredAttributeDef {
    /// Create from a core definition.
    pub fn from_definition(def: &AttributeDefinition) -> Self {
        Self {
            id: def.id.as_str().to_string(),
            name: def.name.clone(),
            description: def.description.clone(),
            default_value: def.default_value,
        }
    }

    /// Convert to a core definition.
    pub fn to_definition(&self) -> AttributeDefinition {
        AttributeDefinition {
            id: AttributeTypeId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            default_value: self.default_value,
        }
    }
}

/// Stored attribute set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredAttributeSet {
    /// Primary key - set ID.
    #[primary_key]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
}

impl StoredAttributeSet {
    /// Create from a core set.
    pub fn from_set(set: &AttributeSet) -> Self {
        Self {
            id: set.id.clone(),
            name: set.name.clone(),
            description: set.description.clone(),
        }
    }

    /// Convert to a core set.
    pub fn to_set(&self) -> AttributeSet {
        AttributeSet {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Stored attribute value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredAttributeValue {
    /// Primary key - composite of set ID and attribute type.
    #[primary_key]
    pub key: String,
    /// Owning set.
    #[secondary_key]
    pub set_id: String,
    /// Attribute type ID.
    pub attribute_type: String,
    /// Category label.
    pub category: Option<String>,
    /// Base value.
    pub base_value: f64,
    /// Lower bound.
    pub min_value: Option<f64>,
    /// Upper bound.
    pub max_value: Option<f64>,
    /// Authoring note.
    pub comment: Option<String>,
}

impl StoredAttributeValue {
    /// Primary key for a (set, attribute type) pair.
    pub fn key_for(set_id: &str, attribute_type: &AttributeTypeId) -> String {
        format!("{}/{}", set_id, attribute_type)
    }

    /// Create from a core value.
    pub fn from_value(value: &AttributeValue) -> Self {
        Self {
            key: Self::key_for(&value.set_id, &value.attribute_type),
            set_id: value.set_id.clone(),
            attribute_type: value.attribute_type.as_str().to_string(),
            category: value.category.clone(),
            base_value: value.base_value,
            min_value: value.min_value,
            max_value: value.max_value,
            comment: value.comment.clone(),
        }
    }

    /// Convert to a core value.
    pub fn to_value(&self) -> AttributeValue {
        AttributeValue {
            set_id: self.set_id.clone(),
            attribute_type: AttributeTypeId::new(self.attribute_type.clone()),
            category: self.category.clone(),
            base_value: self.base_value,
            min_value: self.min_value,
            max_value: self.max_value,
            comment: self.comment.clone(),
        }
    }
}

/// Stored effect definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 4, version = 1)]
#[native_db]
pub struct StoredEffect {
    /// Primary key - effect ID.
    #[primary_key]
    pub id: String,
    /// Applies continuously while active.
    pub is_passive: bool,
    /// Re-applies on a cadence.
    pub is_periodic: bool,
    /// Cadence in seconds.
    pub interval_seconds: f64,
    /// Never expires.
    pub is_infinite: bool,
}

impl StoredEffect {
    /// Create from a core effect.
    pub fn from_effect(effect: &AttributeEffect) -> Self {
        Self {
            id: effect.id.clone(),
            is_passive: effect.is_passive,
            is_periodic: effect.is_periodic,
            interval_seconds: effect.interval_seconds,
            is_infinite: effect.is_infinite,
        }
    }

    /// Convert to a core effect.
    pub fn to_effect(&self) -> AttributeEffect {
        AttributeEffect {
            id: self.id.clone(),
            is_passive: self.is_passive,
            is_periodic: self.is_periodic,
            interval_seconds: self.interval_seconds,
            is_infinite: self.is_infinite,
        }
    }
}

/// Stored modifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 5, version = 1)]
#[native_db]
pub struct StoredModifier {
    /// Primary key - composite of effect ID and modifier ID.
    #[primary_key]
    pub key: String,
    /// Owning effect.
    #[secondary_key]
    pub effect_id: String,
    /// Modifier ID within the effect.
    pub modifier_id: String,
    /// Attribute type ID.
    pub attribute_type: String,
    /// Operation code.
    pub op: u8,
    /// Operand.
    pub value: f64,
    /// Application rank.
    pub execution_order: Option<i32>,
    /// Insertion sequence, the tie-break between equal ranks.
    pub seq: u32,
}

impl StoredModifier {
    /// Primary key for an (effect, modifier) pair.
    pub fn key_for(effect_id: &str, modifier_id: &str) -> String {
        format!("{}/{}", effect_id, modifier_id)
    }

    /// Create from a core modifier and its insertion sequence.
    pub fn from_modifier(modifier: &AttributeModifier, seq: u32) -> Self {
        let op = match modifier.op {
            ModifierOp::Add => 0,
            ModifierOp::Subtract => 1,
            ModifierOp::Multiply => 2,
            ModifierOp::Override => 3,
            ModifierOp::Percentage => 4,
        };
        Self {
            key: Self::key_for(&modifier.effect_id, &modifier.id),
            effect_id: modifier.effect_id.clone(),
            modifier_id: modifier.id.clone(),
            attribute_type: modifier.attribute_type.as_str().to_string(),
            op,
            value: modifier.value,
            execution_order: modifier.execution_order,
            seq,
        }
    }

    /// Convert to a core modifier.
    pub fn to_modifier(&self) -> AttributeModifier {
        let op = match self.op {
            0 => ModifierOp::Add,
            1 => ModifierOp::Subtract,
            2 => ModifierOp::Multiply,
            3 => ModifierOp::Override,
            _ => ModifierOp::Percentage,
        };
        AttributeModifier {
            id: self.modifier_id.clone(),
            effect_id: self.effect_id.clone(),
            attribute_type: AttributeTypeId::new(self.attribute_type.clone()),
            op,
            value: self.value,
            execution_order: self.execution_order,
        }
    }
}
