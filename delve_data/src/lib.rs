//! Shared data model for Delve maps.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_map};
