//! [`Value`] tree → JSON text.
//!
//! Compact output has no whitespace at all. Pretty output puts every entry of
//! a non-empty container on its own line, indented four spaces per nesting
//! level, and writes `": "` between a key and its value. Empty containers are
//! always `{}` / `[]`.
//!
//! # Example
//! ```
//! use compound_json::{serialize, Compound, Value};
//!
//! let mut point = Compound::new();
//! point.add("x", 1).unwrap();
//! point.add("y", 2.5).unwrap();
//! let point = Value::Compound(point);
//!
//! assert_eq!(serialize(&point, false).unwrap(), r#"{"x":1,"y":2.5}"#);
//! assert_eq!(
//!     serialize(&point, true).unwrap(),
//!     "{\n    \"x\": 1,\n    \"y\": 2.5\n}"
//! );
//! ```

use crate::compound::Compound;
use crate::error::{JsonError, Result};
use crate::list::List;
use crate::value::Value;
use tracing::trace;

const INDENT: &str = "    ";

/// Serialize `value` as JSON text, pretty-printed when `pretty` is set.
///
/// Fails with [`JsonError::InvalidEntryType`] only for a non-finite float,
/// which containers refuse to store but a bare `Value::Float` can still hold.
pub fn serialize(value: &Value, pretty: bool) -> Result<String> {
    let mut out = String::new();
    write_value(value, pretty, 1, &mut out)?;
    trace!(bytes = out.len(), pretty, "serialized JSON document");
    Ok(out)
}

/// Dispatch on the variant. `depth` is the indent level applied to the
/// entries of a container written at this position.
fn write_value(value: &Value, pretty: bool, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&format_float(*f)?),
        Value::Str(s) => write_string(s, out),
        Value::Compound(compound) => write_compound(compound, pretty, depth, out)?,
        Value::List(list) => write_list(list, pretty, depth, out)?,
    }
    Ok(())
}

fn write_compound(compound: &Compound, pretty: bool, depth: usize, out: &mut String) -> Result<()> {
    if compound.is_empty() {
        out.push_str("{}");
        return Ok(());
    }

    out.push('{');
    for (i, (key, value)) in compound.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_entry_break(pretty, depth, out);
        write_string(key, out);
        out.push(':');
        if pretty {
            out.push(' ');
        }
        write_value(value, pretty, depth + 1, out)?;
    }
    write_entry_break(pretty, depth - 1, out);
    out.push('}');
    Ok(())
}

fn write_list(list: &List, pretty: bool, depth: usize, out: &mut String) -> Result<()> {
    if list.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    out.push('[');
    for (i, value) in list.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_entry_break(pretty, depth, out);
        write_value(value, pretty, depth + 1, out)?;
    }
    write_entry_break(pretty, depth - 1, out);
    out.push(']');
    Ok(())
}

/// Newline plus indentation, pretty mode only.
fn write_entry_break(pretty: bool, depth: usize, out: &mut String) {
    if pretty {
        out.push('\n');
        for _ in 0..depth {
            out.push_str(INDENT);
        }
    }
}

/// Quote and escape a string. Only `\`, `"`, newline, carriage return, tab,
/// form feed and backspace are escaped; everything else, non-ASCII included,
/// is written as is.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0C}' => out.push_str("\\f"),
            '\u{08}' => out.push_str("\\b"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

/// Locale-independent float text that always reads back as a float.
///
/// Rust's `Debug` form is the shortest representation that round-trips and
/// keeps a fractional part or exponent on integral values (`42.0`, `1e300`),
/// so the deserializer never mistakes it for an integer.
fn format_float(f: f64) -> Result<String> {
    if !f.is_finite() {
        return Err(JsonError::InvalidEntryType(format!("non-finite float {f}")));
    }
    Ok(format!("{f:?}"))
}
