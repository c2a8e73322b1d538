//! Attribute data types
//!
//! An `AttributeDefinition` declares a stat kind globally; an `AttributeSet`
//! bundles bounded `AttributeValue` instances for one entity archetype.
//! Values reference their definition by id, never by embedded object.

use crate::error::{Error, Result};
use crate::identity::AttributeTypeId;
use serde::{Deserialize, Serialize};

/// Global declaration of an attribute kind (e.g. `"health.max"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    /// Unique identifier for this attribute kind
    pub id: AttributeTypeId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Value assigned when a set does not override it
    #[serde(default)]
    pub default_value: f64,
}

impl AttributeDefinition {
    /// Create a new attribute definition
    pub fn new(id: impl Into<AttributeTypeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            default_value: 0.0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the default value
    pub fn with_default(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }
}

/// A named bundle of attribute values for one entity archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Unique identifier for this set
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
}

impl AttributeSet {
    /// Create a new attribute set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// One bounded numeric stat within a set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Owning set
    pub set_id: String,
    /// References an attribute definition by id
    pub attribute_type: AttributeTypeId,
    /// Free-form grouping label, used for display-suffix derivation
    #[serde(default)]
    pub category: Option<String>,
    /// Base value before any effect modifiers
    pub base_value: f64,
    /// Lower bound (no floor when absent)
    #[serde(default)]
    pub min_value: Option<f64>,
    /// Upper bound (no cap when absent)
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Authoring note
    #[serde(default)]
    pub comment: Option<String>,
}

impl AttributeValue {
    /// Create a new attribute value
    pub fn new(
        set_id: impl Into<String>,
        attribute_type: impl Into<AttributeTypeId>,
        base_value: f64,
    ) -> Self {
        Self {
            set_id: set_id.into(),
            attribute_type: attribute_type.into(),
            category: None,
            base_value,
            min_value: None,
            max_value: None,
            comment: None,
        }
    }

    /// Set both bounds
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the authoring comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Check `min <= base <= max` when both bounds are present
    ///
    /// A value missing either bound is unconstrained and always passes.
    pub fn validate_bounds(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if self.base_value < min || self.base_value > max {
                return Err(Error::OutOfRangeValue {
                    min,
                    base: self.base_value,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_ron() {
        let ron_str = r#"
        (
            id: "health.max",
            name: "Max Health",
            description: "Upper bound for hit points",
            default_value: 100.0,
        )
        "#;

        let def: AttributeDefinition = ron::from_str(ron_str).unwrap();
        assert_eq!(def.id.as_str(), "health.max");
        assert_eq!(def.default_value, 100.0);
    }

    #[test]
    fn test_bounds_validation() {
        let ok = AttributeValue::new("hero", "health.max", 100.0).with_bounds(0.0, 200.0);
        assert!(ok.validate_bounds().is_ok());

        let too_high = AttributeValue::new("hero", "health.max", 250.0).with_bounds(0.0, 200.0);
        assert!(matches!(
            too_high.validate_bounds(),
            Err(Error::OutOfRangeValue { .. })
        ));

        // Missing a bound means unconstrained
        let mut open = AttributeValue::new("hero", "health.max", 250.0);
        open.min_value = Some(0.0);
        assert!(open.validate_bounds().is_ok());
    }
}
