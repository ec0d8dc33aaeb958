use flatkey_value::Value;

use crate::errors::FlattenError;
use crate::options::FlattenOptions;
use crate::registry::{self, TransformerRegistry};
use crate::walk;

/// Separator joining sorted entries when comparing canonical forms.
///
/// `|` is not otherwise used as a path or value delimiter. Encoded
/// values that legitimately contain it can fool a comparison; this is
/// the documented, accepted limitation of the unescaped format.
pub(crate) const COMPARE_SEPARATOR: &str = "|";

/// Flattens `value` into its canonical, sorted `path:value` form using
/// the process-wide default transformer registry.
///
/// Total for acyclic input; cyclic structures recurse without bound.
pub fn flatten(value: &Value, options: &FlattenOptions) -> Vec<String> {
    let registry = registry::default_registry_snapshot();
    flatten_with(value, options, &registry)
}

/// Flattens `value` against an explicit, caller-owned registry.
pub fn flatten_with(
    value: &Value,
    options: &FlattenOptions,
    registry: &TransformerRegistry,
) -> Vec<String> {
    let mut entries = Vec::new();
    // Without a limit the traversal cannot fail.
    walk::collect(value, "", &mut entries, false, 0, None, options, registry).ok();
    entries.sort();
    entries
}

/// Flattens `value` with a nesting depth guard.
///
/// For every input whose depth stays within `max_depth` (the root is
/// depth zero) the output is identical to [`flatten`]; a deeper input
/// returns [`FlattenError::DepthLimitExceeded`] instead of exhausting
/// the stack on cyclic or degenerate structures.
pub fn flatten_bounded(
    value: &Value,
    options: &FlattenOptions,
    max_depth: usize,
) -> Result<Vec<String>, FlattenError> {
    let registry = registry::default_registry_snapshot();
    let mut entries = Vec::new();
    walk::collect(
        value,
        "",
        &mut entries,
        false,
        0,
        Some(max_depth),
        options,
        &registry,
    )?;
    entries.sort();
    Ok(entries)
}

/// Compares two values structurally, ignoring field and key order.
///
/// Both sides are flattened with identical configuration, joined with
/// the comparison separator, and checked for string equality.
pub fn flatten_compare(a: &Value, b: &Value, options: &FlattenOptions) -> bool {
    let registry = registry::default_registry_snapshot();
    flatten_compare_with(a, b, options, &registry)
}

/// Compares two values against an explicit, caller-owned registry.
pub fn flatten_compare_with(
    a: &Value,
    b: &Value,
    options: &FlattenOptions,
    registry: &TransformerRegistry,
) -> bool {
    let source = flatten_with(a, options, registry).join(COMPARE_SEPARATOR);
    let destination = flatten_with(b, options, registry).join(COMPARE_SEPARATOR);
    source == destination
}
