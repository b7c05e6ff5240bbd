//! "N/A" substitution for table cells.
//!
//! Cells hold whatever JSON the endpoint sent. A cell falls back when its
//! value is falsy: absent, `null`, `false`, an empty string, or numeric
//! zero. Zero is treated as unknown on purpose, so a real founding year of
//! `0` also renders as the fallback. Any other value is shown as text,
//! whatever its type.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use serde_json::Value;

/// Literal shown in place of a missing value.
pub const FALLBACK_TEXT: &str = "N/A";

/// Values that render as the fallback text.
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

impl Falsy for Value {
    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }
}

/// Text for a present, truthy value.
///
/// Strings are shown unquoted and whole-number floats drop the trailing
/// `.0`; arrays and objects fall back to their JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) => f.to_string(),
            (None, None, None) => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Render `value`, or [`FALLBACK_TEXT`] when it is absent or falsy.
pub fn display_or_fallback(value: Option<&Value>) -> String {
    match value {
        Some(v) if !v.is_falsy() => cell_text(v),
        _ => FALLBACK_TEXT.to_owned(),
    }
}
