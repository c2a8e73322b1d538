//! Vigor DB - Database layer using native_db
//!
//! Provides persistent storage for:
//! - Attribute definitions, sets, and values
//! - Effect definitions and their ordered modifiers
//!
//! Whole-catalog loads replay records through the validating catalog
//! operations, so invariants hold for anything read back.

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use store::Store;
