//! Gameplay effect types
//!
//! Effects are the "write" side of the attribute model. Each effect owns an
//! ordered list of modifiers; a modifier targets one attribute type with one
//! operation. Application order is `execution_order` ascending, absent ranks
//! last, ties broken by insertion order.

use crate::catalog::AttributeCatalog;
use crate::error::{Error, Result};
use crate::identity::AttributeTypeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An operation a modifier performs against the running value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierOp {
    /// Add the operand
    Add,
    /// Subtract the operand
    Subtract,
    /// Multiply by the operand
    Multiply,
    /// Replace the running value with the operand
    Override,
    /// Scale by `1 + operand / 100`
    Percentage,
}

impl ModifierOp {
    /// Apply this operation to a running value
    pub fn apply(&self, current: f64, operand: f64) -> f64 {
        match self {
            ModifierOp::Add => current + operand,
            ModifierOp::Subtract => current - operand,
            ModifierOp::Multiply => current * operand,
            ModifierOp::Override => operand,
            // Added-fraction form keeps exact-decimal operands exact
            ModifierOp::Percentage => current + current * operand / 100.0,
        }
    }
}

/// A gameplay effect definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeEffect {
    /// Unique identifier for this effect
    pub id: String,
    /// Applies continuously while active, with no discrete trigger
    #[serde(default)]
    pub is_passive: bool,
    /// Re-applies its modifiers on a cadence
    #[serde(default)]
    pub is_periodic: bool,
    /// Cadence in seconds; meaningful only when periodic
    #[serde(default = "default_interval")]
    pub interval_seconds: f64,
    /// Never expires
    #[serde(default)]
    pub is_infinite: bool,
}

fn default_interval() -> f64 {
    1.0
}

impl AttributeEffect {
    /// Create a new one-shot effect
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_passive: false,
            is_periodic: false,
            interval_seconds: 1.0,
            is_infinite: false,
        }
    }

    /// Mark the effect periodic with the given cadence
    pub fn periodic(mut self, interval_seconds: f64) -> Self {
        self.is_periodic = true;
        self.interval_seconds = interval_seconds;
        self
    }

    /// Mark the effect passive
    pub fn passive(mut self) -> Self {
        self.is_passive = true;
        self
    }

    /// Mark the effect as never expiring
    pub fn infinite(mut self) -> Self {
        self.is_infinite = true;
        self
    }
}

/// One ordered operation within an effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    /// Unique identifier within the owning effect
    pub id: String,
    /// Owning effect
    pub effect_id: String,
    /// References an attribute definition by id
    pub attribute_type: AttributeTypeId,
    /// Operation to perform
    pub op: ModifierOp,
    /// Operand
    pub value: f64,
    /// Application rank; absent ranks apply after all explicit ones
    #[serde(default)]
    pub execution_order: Option<i32>,
}

impl AttributeModifier {
    /// Create a new modifier
    pub fn new(
        id: impl Into<String>,
        effect_id: impl Into<String>,
        attribute_type: impl Into<AttributeTypeId>,
        op: ModifierOp,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            effect_id: effect_id.into(),
            attribute_type: attribute_type.into(),
            op,
            value,
            execution_order: Some(0),
        }
    }

    /// Set the application rank
    pub fn with_order(mut self, order: i32) -> Self {
        self.execution_order = Some(order);
        self
    }

    /// Clear the application rank, sorting this modifier last
    pub fn unordered(mut self) -> Self {
        self.execution_order = None;
        self
    }
}

/// Catalog of gameplay effects and their modifiers
///
/// Modifier attribute types are validated against the attribute catalog the
/// caller passes in; the effect catalog never holds its own copy, so one
/// attribute catalog can back several effect catalogs (live vs. preview).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectCatalog {
    /// Effects by id
    effects: IndexMap<String, AttributeEffect>,
    /// Modifiers per effect, in insertion order
    modifiers: IndexMap<String, Vec<AttributeModifier>>,
}

impl EffectCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new effect
    ///
    /// Fails with `DuplicateIdentifier` if the effect id exists, and with
    /// `InvalidPeriodicity` if the effect is periodic with a non-positive
    /// interval.
    pub fn define_effect(&mut self, effect: AttributeEffect) -> Result<()> {
        if self.effects.contains_key(&effect.id) {
            return Err(Error::DuplicateIdentifier(effect.id.clone()));
        }
        if effect.is_periodic && effect.interval_seconds <= 0.0 {
            return Err(Error::InvalidPeriodicity(effect.interval_seconds));
        }
        self.modifiers.insert(effect.id.clone(), Vec::new());
        self.effects.insert(effect.id.clone(), effect);
        Ok(())
    }

    /// Append a modifier to its owning effect
    ///
    /// The position in the owning list is the insertion sequence used as the
    /// tie-break between equal execution orders.
    pub fn add_modifier(
        &mut self,
        attributes: &AttributeCatalog,
        modifier: AttributeModifier,
    ) -> Result<()> {
        if !self.effects.contains_key(&modifier.effect_id) {
            return Err(Error::UnknownEffect(modifier.effect_id.clone()));
        }
        if !attributes.has_definition(&modifier.attribute_type) {
            return Err(Error::UnknownAttributeType(
                modifier.attribute_type.to_string(),
            ));
        }
        self.modifiers
            .entry(modifier.effect_id.clone())
            .or_default()
            .push(modifier);
        Ok(())
    }

    /// Remove a modifier from an effect; absent entries are not an error
    pub fn remove_modifier(&mut self, effect_id: &str, modifier_id: &str) {
        if let Some(list) = self.modifiers.get_mut(effect_id) {
            list.retain(|m| m.id != modifier_id);
        }
    }

    /// Look up an effect
    pub fn lookup_effect(&self, id: &str) -> Option<&AttributeEffect> {
        self.effects.get(id)
    }

    /// All effects, in insertion order
    pub fn list_effects(&self) -> impl Iterator<Item = &AttributeEffect> {
        self.effects.values()
    }

    /// All modifiers of an effect in application order
    ///
    /// Returns an empty iterator for unknown effect ids.
    pub fn modifiers(&self, effect_id: &str) -> impl Iterator<Item = &AttributeModifier> {
        self.sorted(effect_id).into_iter()
    }

    /// All modifiers of an effect in insertion order
    ///
    /// Persistence uses this; the stored sequence must preserve insertion
    /// order or tie-breaks between equal ranks would drift across a reload.
    pub fn raw_modifiers(&self, effect_id: &str) -> impl Iterator<Item = &AttributeModifier> {
        self.modifiers.get(effect_id).into_iter().flatten()
    }

    /// Modifiers of one effect targeting one attribute type, in application
    /// order
    ///
    /// Returns an empty iterator for unknown effect ids or untargeted types.
    pub fn ordered_modifiers<'a>(
        &'a self,
        effect_id: &str,
        attribute_type: &'a AttributeTypeId,
    ) -> impl Iterator<Item = &'a AttributeModifier> {
        self.sorted(effect_id)
            .into_iter()
            .filter(move |m| &m.attribute_type == attribute_type)
    }

    fn sorted(&self, effect_id: &str) -> Vec<&AttributeModifier> {
        let mut mods: Vec<&AttributeModifier> = self
            .modifiers
            .get(effect_id)
            .map(|list| list.iter().collect())
            .unwrap_or_default();
        // Stable sort: equal ranks keep insertion order
        mods.sort_by_key(|m| (m.execution_order.is_none(), m.execution_order));
        mods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeDefinition;

    fn attributes() -> AttributeCatalog {
        let mut catalog = AttributeCatalog::new();
        catalog
            .define_attribute(AttributeDefinition::new("health.max", "Max Health"))
            .unwrap();
        catalog
            .define_attribute(AttributeDefinition::new("mana.max", "Max Mana"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_modifier_op() {
        assert_eq!(ModifierOp::Add.apply(10.0, 5.0), 15.0);
        assert_eq!(ModifierOp::Subtract.apply(10.0, 5.0), 5.0);
        assert_eq!(ModifierOp::Multiply.apply(10.0, 5.0), 50.0);
        assert_eq!(ModifierOp::Override.apply(10.0, 5.0), 5.0);
        assert_eq!(ModifierOp::Percentage.apply(200.0, 10.0), 220.0);
    }

    #[test]
    fn test_duplicate_effect_rejected() {
        let mut effects = EffectCatalog::new();
        effects.define_effect(AttributeEffect::new("regen")).unwrap();
        let err = effects
            .define_effect(AttributeEffect::new("regen"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier(_)));
    }

    #[test]
    fn test_periodic_interval_must_be_positive() {
        let mut effects = EffectCatalog::new();
        let err = effects
            .define_effect(AttributeEffect::new("poison").periodic(0.0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPeriodicity(_)));

        effects
            .define_effect(AttributeEffect::new("poison").periodic(0.5))
            .unwrap();
    }

    #[test]
    fn test_add_modifier_validates_references() {
        let attributes = attributes();
        let mut effects = EffectCatalog::new();
        effects.define_effect(AttributeEffect::new("regen")).unwrap();

        let err = effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("m1", "missing", "health.max", ModifierOp::Add, 5.0),
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEffect(_)));

        let err = effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("m1", "regen", "stamina.max", ModifierOp::Add, 5.0),
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAttributeType(_)));
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let attributes = attributes();
        let mut effects = EffectCatalog::new();
        effects.define_effect(AttributeEffect::new("buff")).unwrap();

        // Same rank: insertion order decides. No rank: sorts last.
        let mods = [
            AttributeModifier::new("late", "buff", "health.max", ModifierOp::Add, 1.0).unordered(),
            AttributeModifier::new("b", "buff", "health.max", ModifierOp::Add, 2.0).with_order(1),
            AttributeModifier::new("a", "buff", "health.max", ModifierOp::Add, 3.0).with_order(1),
            AttributeModifier::new("first", "buff", "health.max", ModifierOp::Add, 4.0)
                .with_order(0),
        ];
        for m in mods {
            effects.add_modifier(&attributes, m).unwrap();
        }

        let ty = AttributeTypeId::new("health.max");
        let ids: Vec<&str> = effects
            .ordered_modifiers("buff", &ty)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "b", "a", "late"]);

        // Restartable: a second pass yields the same sequence
        let again: Vec<&str> = effects
            .ordered_modifiers("buff", &ty)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_ordered_modifiers_filters_by_type() {
        let attributes = attributes();
        let mut effects = EffectCatalog::new();
        effects.define_effect(AttributeEffect::new("buff")).unwrap();
        effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("hp", "buff", "health.max", ModifierOp::Add, 5.0),
            )
            .unwrap();
        effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("mp", "buff", "mana.max", ModifierOp::Add, 3.0),
            )
            .unwrap();

        let ty = AttributeTypeId::new("mana.max");
        let ids: Vec<&str> = effects
            .ordered_modifiers("buff", &ty)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mp"]);
        assert_eq!(effects.modifiers("buff").count(), 2);
    }

    #[test]
    fn test_unknown_effect_yields_empty_sequence() {
        let effects = EffectCatalog::new();
        let ty = AttributeTypeId::new("health.max");
        assert_eq!(effects.ordered_modifiers("missing", &ty).count(), 0);
        assert_eq!(effects.modifiers("missing").count(), 0);
    }

    #[test]
    fn test_remove_modifier_is_idempotent() {
        let attributes = attributes();
        let mut effects = EffectCatalog::new();
        effects.define_effect(AttributeEffect::new("buff")).unwrap();
        effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("hp", "buff", "health.max", ModifierOp::Add, 5.0),
            )
            .unwrap();

        effects.remove_modifier("buff", "hp");
        effects.remove_modifier("buff", "hp");
        effects.remove_modifier("missing", "hp");
        assert_eq!(effects.modifiers("buff").count(), 0);
    }
}
