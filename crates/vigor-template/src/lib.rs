//! Vigor Template - Portable attribute set documents
//!
//! Serializes attribute sets to a hand-editable RON document carrying
//! authoring metadata (timestamps, version, tags) and decodes them back with
//! full round-trip fidelity.

mod codec;
mod error;
mod schema;

pub use codec::{decode, encode, read_template, write_template};
pub use error::{Error, Result};
pub use schema::{AttributeSetTemplate, AttributeValueTemplate, TemplateMetadata};
