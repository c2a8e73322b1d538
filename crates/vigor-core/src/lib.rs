//! Vigor Core - Attribute and gameplay-effect model
//!
//! This crate provides the data/validation/resolution engine for character
//! attributes and gameplay effects:
//! - Attribute definitions, sets, and bounded values (`AttributeCatalog`)
//! - Gameplay effects with ordered modifiers (`EffectCatalog`)
//! - Deterministic modifier resolution (`resolve`, `resolve_clamped`)
//! - Dotted-identifier helpers for display and lookup keys
//!
//! All structures are plain single-threaded data; callers coordinate access
//! when sharing a catalog across threads. `resolve` and its variants are
//! pure functions.

mod attribute;
mod catalog;
mod effect;
mod error;
pub mod identity;
pub mod resolver;

pub use attribute::{AttributeDefinition, AttributeSet, AttributeValue};
pub use catalog::AttributeCatalog;
pub use effect::{AttributeEffect, AttributeModifier, EffectCatalog, ModifierOp};
pub use error::{Error, Result};
pub use identity::AttributeTypeId;
pub use resolver::{clamp, resolve, resolve_clamped};
