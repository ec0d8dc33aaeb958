//! Structural value model for the Flatkey flattening engine.
//!
//! This crate provides:
//! - The tagged `Value` sum type over nil, primitives, references,
//!   sequences, mappings, and records
//! - The canonical terminal encoder (`encode`)
//! - Dotted path construction and `path:value` entry formatting
//! - Bridges from `serde_json::Value` and from any `serde::Serialize` type
//!
//! Core invariants:
//! - A reference is dereferenced transparently exactly once per
//!   classification step; a nil reference and `Value::Null` are
//!   indistinguishable terminal states
//! - Record fields keep declaration order and carry a visibility tag
//! - Encoding is deterministic and locale-independent; delimiter
//!   characters are deliberately not escaped
//!
#![deny(missing_docs)]

/// Canonical terminal encoding.
pub mod encode;
/// Bridge from `serde_json::Value`.
pub mod json;
/// Dotted path construction and entry formatting.
pub mod path;
/// Serde bridge converting arbitrary `Serialize` types into values.
pub mod ser;
/// The tagged value model.
pub mod value;

pub use encode::{encode, NULL_TOKEN, UNDEFINED_TOKEN};
pub use path::{format_entry, join_path};
pub use ser::{to_value, SerializeError};
pub use value::{Field, Record, Value};
