//! Data model and value types for operator fields
//!
//! This module provides the literal value model passed into and returned by
//! operators, together with the schema type information used in descriptors.

#![warn(missing_docs)]

pub mod types;
pub mod value;

pub use types::TypeInfo;
pub use value::Value;
