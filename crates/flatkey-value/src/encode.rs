use crate::value::Value;

/// Canonical text for the terminal nil states.
pub const NULL_TOKEN: &str = "[null]";

/// Canonical text for a value with no concrete content at all.
pub const UNDEFINED_TOKEN: &str = "[undefined]";

/// Renders a terminal value to its canonical string.
///
/// The function is total over `Value`: container kinds, which the
/// traverser never routes here, fall back to a best-effort `Debug`
/// rendering. Output is deterministic and locale-independent. Delimiter
/// characters (`:`, `.`, `|`, `[`, `]`) occurring inside strings are not
/// escaped; the canonical form is for comparison, not reconstruction.
pub fn encode(value: &Value) -> String {
    match value {
        Value::Null | Value::Ref(None) => NULL_TOKEN.to_string(),
        Value::Unit => UNDEFINED_TOKEN.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Uint(u) => u.to_string(),
        // Shortest round-trip decimal form; Display never emits exponents.
        Value::Float(f) => f.to_string(),
        Value::Char(c) => c.to_string(),
        Value::Bytes(b) => format!("{:?}", b),
        Value::Ref(Some(inner)) => encode(inner),
        Value::Seq(_) | Value::Map(_) | Value::Record(_) => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_and_undefined_tokens() {
        assert_eq!(encode(&Value::Null), "[null]");
        assert_eq!(encode(&Value::Ref(None)), "[null]");
        assert_eq!(encode(&Value::Unit), "[undefined]");
    }

    #[test]
    fn strings_pass_through_unescaped() {
        assert_eq!(encode(&Value::Str("hello".into())), "hello");
        assert_eq!(encode(&Value::Str("a:b.c|d[e]".into())), "a:b.c|d[e]");
        assert_eq!(encode(&Value::Str(String::new())), "");
    }

    #[test]
    fn numbers_render_in_base_ten() {
        assert_eq!(encode(&Value::Int(-42)), "-42");
        assert_eq!(encode(&Value::Uint(42)), "42");
        assert_eq!(encode(&Value::Bool(true)), "true");
        assert_eq!(encode(&Value::Bool(false)), "false");
    }

    #[test]
    fn floats_use_shortest_decimal_form() {
        assert_eq!(encode(&Value::Float(3.14)), "3.14");
        assert_eq!(encode(&Value::Float(1.0)), "1");
        assert_eq!(encode(&Value::Float(-0.5)), "-0.5");
        assert_eq!(encode(&Value::Float(1e3)), "1000");
    }

    #[test]
    fn references_encode_their_target() {
        assert_eq!(encode(&Value::reference(7i64)), "7");
        assert_eq!(encode(&Value::reference("x")), "x");
    }

    #[test]
    fn exotic_kinds_get_best_effort_renderings() {
        assert_eq!(encode(&Value::Char('x')), "x");
        assert_eq!(encode(&Value::Bytes(vec![1, 2])), "[1, 2]");
    }
}
