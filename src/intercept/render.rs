//! Human-readable rendering of argument and result values.
//!
//! Strings are written bare, sequences as `[a, b]`, maps as `{k=v}`, and
//! absent values as `null`.

use serde::Serialize;

use crate::intercept::Value;

pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Render an argument list as a sequence.
pub fn render_args(arguments: &[Value]) -> String {
    let mut out = String::from("[");
    write_seq(&mut out, arguments.iter());
    out.push(']');
    out
}

/// Render any serializable value. Tuples render as sequences.
pub fn render_serialized<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(v) => render_value(&v),
        Err(e) => format!("<unrenderable: {e}>"),
    }
}

/// Render a function's arguments as a sequence.
///
/// A tuple or sequence is the argument list itself, `()` is no arguments,
/// anything else is a single argument.
pub fn render_params<A: Serialize + ?Sized>(arguments: &A) -> String {
    match serde_json::to_value(arguments) {
        Ok(Value::Array(items)) => render_args(&items),
        Ok(Value::Null) => render_args(&[]),
        Ok(single) => render_args(std::slice::from_ref(&single)),
        Err(e) => format!("<unrenderable: {e}>"),
    }
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            write_seq(out, items.iter());
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(k);
                out.push('=');
                write_value(out, v);
            }
            out.push('}');
        }
    }
}

fn write_seq<'v>(out: &mut String, items: impl Iterator<Item = &'v Value>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_value(out, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_args() {
        assert_eq!(render_args(&[json!(1), json!("a")]), "[1, a]");
        assert_eq!(render_args(&[]), "[]");
        assert_eq!(render_args(&[Value::Null, json!([1, [2, 3]])]), "[null, [1, [2, 3]]]");
    }

    #[test]
    fn test_render_scalars_and_maps() {
        assert_eq!(render_value(&json!("ok")), "ok");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(false)), "false");
        assert_eq!(render_value(&json!({"id": 7, "tags": ["x"]})), "{id=7, tags=[x]}");
    }

    #[test]
    fn test_render_serialized_tuple() {
        assert_eq!(render_serialized(&(1, "a")), "[1, a]");
        assert_eq!(render_serialized(&Option::<u8>::None), "null");
    }

    #[test]
    fn test_render_params_is_always_a_sequence() {
        assert_eq!(render_params(&()), "[]");
        assert_eq!(render_params(&"tea"), "[tea]");
        assert_eq!(render_params(&42), "[42]");
        assert_eq!(render_params(&(1, "a")), "[1, a]");
        assert_eq!(render_params(&json!({"id": 1})), "[{id=1}]");
    }
}
