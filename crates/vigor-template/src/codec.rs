//! Template encode/decode
//!
//! Templates travel as RON text. Encoding is pretty-printed so documents
//! stay hand-editable; decoding validates shape and rejects duplicate
//! attribute entries. `decode(encode(t))` is field-wise equal to `t`.

use crate::error::{Error, Result};
use crate::schema::AttributeSetTemplate;
use ron::ser::PrettyConfig;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Encode a template as pretty-printed RON
pub fn encode(template: &AttributeSetTemplate) -> Result<String> {
    let text = ron::ser::to_string_pretty(template, PrettyConfig::default())?;
    Ok(text)
}

/// Decode a template from RON text
///
/// Fails with `MalformedTemplate` when required fields (`id`, `name` on the
/// set; `id`, `base_value` on each entry) are missing or of the wrong shape,
/// and with `DuplicateAttributeType` when two entries share an id.
pub fn decode(text: &str) -> Result<AttributeSetTemplate> {
    let template: AttributeSetTemplate = ron::from_str(text)?;

    let mut seen = HashSet::new();
    for entry in &template.attributes {
        if !seen.insert(&entry.id) {
            return Err(Error::DuplicateAttributeType(entry.id.to_string()));
        }
    }

    Ok(template)
}

/// Read and decode a template file
pub fn read_template(path: impl AsRef<Path>) -> Result<AttributeSetTemplate> {
    let text = fs::read_to_string(path)?;
    decode(&text)
}

/// Encode and write a template file
pub fn write_template(path: impl AsRef<Path>, template: &AttributeSetTemplate) -> Result<()> {
    let text = encode(template)?;
    fs::write(path, text)?;
    Ok(())
}
