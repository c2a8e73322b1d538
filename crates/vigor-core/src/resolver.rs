//! Modifier resolution
//!
//! A pure left fold over an already-ordered modifier sequence. Ordering is
//! the caller's responsibility (`EffectCatalog::ordered_modifiers` produces
//! it); the resolver applies operations and nothing else. Clamping to a
//! value's bounds is an explicit separate step so the resolver stays usable
//! for unconstrained attribute types.

use crate::effect::AttributeModifier;

/// Fold an ordered modifier sequence into a final value
///
/// An empty sequence returns `base` unchanged. Never fails.
pub fn resolve<'a, I>(base: f64, modifiers: I) -> f64
where
    I: IntoIterator<Item = &'a AttributeModifier>,
{
    modifiers
        .into_iter()
        .fold(base, |acc, m| m.op.apply(acc, m.value))
}

/// Clamp a resolved value to optional bounds
///
/// Either bound may be absent; an absent bound does not constrain.
pub fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = match min {
        Some(min) => value.max(min),
        None => value,
    };
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Resolve and then clamp, for callers that do want bounds applied
pub fn resolve_clamped<'a, I>(base: f64, modifiers: I, min: Option<f64>, max: Option<f64>) -> f64
where
    I: IntoIterator<Item = &'a AttributeModifier>,
{
    clamp(resolve(base, modifiers), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeDefinition;
    use crate::catalog::AttributeCatalog;
    use crate::effect::{AttributeEffect, AttributeModifier, EffectCatalog, ModifierOp};
    use crate::identity::AttributeTypeId;

    fn modifier(op: ModifierOp, value: f64) -> AttributeModifier {
        AttributeModifier::new("m", "e", "health.max", op, value)
    }

    #[test]
    fn test_empty_sequence_is_identity() {
        for base in [0.0, -3.5, 42.0, f64::MAX] {
            assert_eq!(resolve(base, []), base);
        }
    }

    #[test]
    fn test_fold_applies_left_to_right() {
        let mods = [
            modifier(ModifierOp::Add, 10.0),
            modifier(ModifierOp::Multiply, 2.0),
            modifier(ModifierOp::Subtract, 5.0),
        ];
        assert_eq!(resolve(5.0, &mods), 25.0);
    }

    #[test]
    fn test_override_discards_accumulator() {
        let mods = [
            modifier(ModifierOp::Multiply, 100.0),
            modifier(ModifierOp::Override, 7.0),
            modifier(ModifierOp::Add, 3.0),
        ];
        // Whatever entered the override step, the result is 7 + 3
        assert_eq!(resolve(1.0, &mods), 10.0);
        assert_eq!(resolve(-999.0, &mods), 10.0);
    }

    #[test]
    fn test_percentage_scales_from_hundred() {
        let mods = [modifier(ModifierOp::Percentage, 10.0)];
        assert_eq!(resolve(100.0, &mods), 110.0);

        let mods = [modifier(ModifierOp::Percentage, -50.0)];
        assert_eq!(resolve(80.0, &mods), 40.0);
    }

    #[test]
    fn test_no_implicit_clamping() {
        let mods = [modifier(ModifierOp::Add, 1000.0)];
        assert_eq!(resolve(100.0, &mods), 1100.0);
        assert_eq!(resolve_clamped(100.0, &mods, Some(0.0), Some(200.0)), 200.0);
        assert_eq!(clamp(-5.0, Some(0.0), None), 0.0);
        assert_eq!(clamp(-5.0, None, None), -5.0);
    }

    #[test]
    fn test_regen_scenario() {
        let mut attributes = AttributeCatalog::new();
        attributes
            .define_attribute(
                AttributeDefinition::new("health.max", "Max Health").with_default(100.0),
            )
            .unwrap();

        let mut effects = EffectCatalog::new();
        effects
            .define_effect(AttributeEffect::new("regen").periodic(1.0))
            .unwrap();
        effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("r1", "regen", "health.max", ModifierOp::Add, 5.0)
                    .with_order(0),
            )
            .unwrap();
        effects
            .add_modifier(
                &attributes,
                AttributeModifier::new("r2", "regen", "health.max", ModifierOp::Percentage, 10.0)
                    .with_order(1),
            )
            .unwrap();

        let ty = AttributeTypeId::new("health.max");
        let resolved = resolve(100.0, effects.ordered_modifiers("regen", &ty));
        assert_eq!(resolved, 115.5);
    }
}
