use flatkey_value::{encode, format_entry, join_path, Value, NULL_TOKEN};

use crate::errors::FlattenError;
use crate::options::FlattenOptions;
use crate::registry::TransformerRegistry;

/// Recursively traverses `value`, appending one formatted entry per
/// terminal to `out`. Entry order is not meaningful until the caller
/// sorts.
///
/// Steps, in priority order: prune on the accumulated path, emit the
/// nil terminal, consult the transformer registry, then dispatch
/// structurally. `in_array` is true exactly when `value` is a direct
/// element of an enclosing sequence with no intervening mapping or
/// record boundary; crossing into a mapping entry or record field
/// resets it.
///
/// `limit` of `None` makes the traversal total; with `Some(limit)`,
/// descending to a depth greater than the limit fails instead of
/// recursing further.
pub(crate) fn collect(
    value: &Value,
    prefix: &str,
    out: &mut Vec<String>,
    in_array: bool,
    depth: usize,
    limit: Option<usize>,
    options: &FlattenOptions,
    registry: &TransformerRegistry,
) -> Result<(), FlattenError> {
    if options.should_skip(prefix) {
        return Ok(());
    }

    if let Some(limit) = limit {
        if depth > limit {
            return Err(FlattenError::DepthLimitExceeded {
                limit,
                path: prefix.to_string(),
            });
        }
    }

    // Nil wins over transformer lookup: a handler never sees a nil
    // instance of its type.
    if value.is_nil() {
        out.push(format_entry(prefix, NULL_TOKEN, in_array));
        return Ok(());
    }

    if let Some(fragments) = registry.resolve(value) {
        for fragment in fragments {
            out.push(format_entry(prefix, &fragment, in_array));
        }
        return Ok(());
    }

    match value.deref_once() {
        Value::Seq(items) => {
            for item in items {
                collect(item, prefix, out, true, depth + 1, limit, options, registry)?;
            }
        }
        Value::Map(entries) => {
            for (key, child) in entries {
                collect(
                    child,
                    &join_path(prefix, key),
                    out,
                    false,
                    depth + 1,
                    limit,
                    options,
                    registry,
                )?;
            }
        }
        Value::Record(record) => {
            for field in record.fields() {
                if !field.visible {
                    continue;
                }
                collect(
                    &field.value,
                    &join_path(prefix, &field.name),
                    out,
                    false,
                    depth + 1,
                    limit,
                    options,
                    registry,
                )?;
            }
        }
        terminal => out.push(format_entry(prefix, &encode(terminal), in_array)),
    }

    Ok(())
}
