//! Canonical flattening and structural comparison for nested values.
//!
//! This crate provides:
//! - `flatten`: conversion of a nested value into a sorted, canonical
//!   set of `path:value` strings
//! - `flatten_compare`: order-independent structural equality built on
//!   that canonical form
//! - Field filtering via include/exclude path sets
//! - A transformer registry overriding structural recursion per record
//!   type, both as an explicit object and as a process-wide default
//! - Structural fingerprint digests over the canonical form
//!
//! Core invariants:
//! - Output order is canonical: byte-wise ascending after traversal
//! - Field/key ordering of the input never affects the result
//! - Flattening is total for acyclic input; only the opt-in bounded
//!   entry point can fail
//!
#![deny(missing_docs)]

/// Error types for bounded flattening.
pub mod errors;
/// Structural fingerprint digests.
pub mod fingerprint;
/// Top-level flatten and comparison API.
pub mod flatten;
/// Filter options controlling which paths are emitted.
pub mod options;
/// Transformer registration and lookup.
pub mod registry;
mod walk;

pub use errors::FlattenError;
pub use fingerprint::{fingerprint, fingerprint_with, Digest, DigestAlg};
pub use flatten::{
    flatten, flatten_bounded, flatten_compare, flatten_compare_with, flatten_with,
};
pub use options::FlattenOptions;
pub use registry::{register_transformer, Transformer, TransformerRegistry};

pub use flatkey_value::{to_value, Field, Record, Value};
