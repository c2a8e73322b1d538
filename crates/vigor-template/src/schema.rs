//! Template document schema
//!
//! The portable form of an attribute set. On top of the live catalog fields
//! it carries authoring metadata: timestamps, a document version, and tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use vigor_core::identity::prefix_of;
use vigor_core::{AttributeSet, AttributeTypeId, AttributeValue};

/// Authoring metadata attached to a template document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateMetadata {
    /// When the template was first written
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the template was last written
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Document revision counter
    #[serde(default = "default_version")]
    pub version: u32,
    /// Free-form labels; compared as a set, order never matters
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

fn default_version() -> u32 {
    1
}

/// Portable document form of an attribute set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSetTemplate {
    /// Set identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// When the template was first written
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the template was last written
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Document revision counter
    #[serde(default = "default_version")]
    pub version: u32,
    /// Free-form labels; compared as a set, order never matters
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// One entry per attribute type
    #[serde(default)]
    pub attributes: Vec<AttributeValueTemplate>,
}

/// One attribute value entry inside a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValueTemplate {
    /// Attribute type identifier
    pub id: AttributeTypeId,
    /// Grouping label; derived from the id's dotted prefix when the live
    /// value carried none
    #[serde(default)]
    pub category: Option<String>,
    /// Base value
    pub base_value: f64,
    /// Lower bound
    #[serde(default)]
    pub min_value: Option<f64>,
    /// Upper bound
    #[serde(default)]
    pub max_value: Option<f64>,
    /// Authoring note
    #[serde(default)]
    pub comment: Option<String>,
}

impl AttributeSetTemplate {
    /// Build a template from a live set, its values, and authoring metadata
    ///
    /// Each entry's category falls back to the attribute id's dotted prefix
    /// when the value has no category of its own. An undotted id yields no
    /// category.
    pub fn from_catalog<'a, I>(set: &AttributeSet, values: I, metadata: TemplateMetadata) -> Self
    where
        I: IntoIterator<Item = &'a AttributeValue>,
    {
        let attributes = values
            .into_iter()
            .map(|value| AttributeValueTemplate {
                id: value.attribute_type.clone(),
                category: value.category.clone().or_else(|| {
                    prefix_of(value.attribute_type.as_str()).map(str::to_string)
                }),
                base_value: value.base_value,
                min_value: value.min_value,
                max_value: value.max_value,
                comment: value.comment.clone(),
            })
            .collect();

        Self {
            id: set.id.clone(),
            name: set.name.clone(),
            description: set.description.clone(),
            created_at: metadata.created_at,
            updated_at: metadata.updated_at,
            version: metadata.version,
            tags: metadata.tags,
            attributes,
        }
    }

    /// Split back into the live catalog form plus metadata
    pub fn into_catalog_entries(self) -> (AttributeSet, Vec<AttributeValue>, TemplateMetadata) {
        let set = AttributeSet::new(self.id.clone(), self.name).with_description(self.description);
        let values = self
            .attributes
            .into_iter()
            .map(|entry| AttributeValue {
                set_id: set.id.clone(),
                attribute_type: entry.id,
                category: entry.category,
                base_value: entry.base_value,
                min_value: entry.min_value,
                max_value: entry.max_value,
                comment: entry.comment,
            })
            .collect();
        let metadata = TemplateMetadata {
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            tags: self.tags,
        };
        (set, values, metadata)
    }

    /// The metadata portion of this template
    pub fn metadata(&self) -> TemplateMetadata {
        TemplateMetadata {
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_falls_back_to_dotted_prefix() {
        let set = AttributeSet::new("hero", "Hero");
        let values = [
            AttributeValue::new("hero", "weapon.damage.base", 12.0),
            AttributeValue::new("hero", "luck", 1.0),
            AttributeValue::new("hero", "health.max", 100.0).with_category("vitals"),
        ];

        let template =
            AttributeSetTemplate::from_catalog(&set, &values, TemplateMetadata::default());

        assert_eq!(
            template.attributes[0].category.as_deref(),
            Some("weapon.damage")
        );
        assert_eq!(template.attributes[1].category, None);
        assert_eq!(template.attributes[2].category.as_deref(), Some("vitals"));
    }

    #[test]
    fn test_catalog_entries_round_trip() {
        let set = AttributeSet::new("hero", "Hero").with_description("Player archetype");
        let values = [AttributeValue::new("hero", "health.max", 100.0).with_bounds(0.0, 200.0)];
        let metadata = TemplateMetadata {
            version: 4,
            tags: ["player"].into_iter().map(String::from).collect(),
            ..TemplateMetadata::default()
        };

        let template = AttributeSetTemplate::from_catalog(&set, &values, metadata.clone());
        assert_eq!(template.metadata(), metadata);

        let (set_back, values_back, metadata_back) = template.into_catalog_entries();
        assert_eq!(set_back, set);
        assert_eq!(values_back.len(), 1);
        assert_eq!(values_back[0].set_id, "hero");
        assert_eq!(values_back[0].min_value, Some(0.0));
        assert_eq!(metadata_back, metadata);
    }
}
