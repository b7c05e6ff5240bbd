use super::*;
use serde_json::json;

fn show(value: &Value) -> String {
    display_or_fallback(Some(value))
}

// =============================================================
// Falsy values
// =============================================================

#[test]
fn missing_value_falls_back() {
    assert_eq!(display_or_fallback(None), FALLBACK_TEXT);
}

#[test]
fn null_falls_back() {
    assert_eq!(show(&Value::Null), "N/A");
}

#[test]
fn empty_text_falls_back() {
    assert_eq!(show(&json!("")), "N/A");
}

#[test]
fn zero_falls_back() {
    assert_eq!(show(&json!(0)), "N/A");
    assert_eq!(show(&json!(0.0)), "N/A");
}

#[test]
fn false_falls_back() {
    assert_eq!(show(&json!(false)), "N/A");
}

// =============================================================
// Truthy values of any type
// =============================================================

#[test]
fn present_text_is_shown_unquoted() {
    assert_eq!(show(&json!("Acme")), "Acme");
}

#[test]
fn whitespace_text_is_not_falsy() {
    assert_eq!(show(&json!(" ")), " ");
}

#[test]
fn integer_is_shown() {
    assert_eq!(show(&json!(1998)), "1998");
    assert_eq!(show(&json!(-500)), "-500");
}

#[test]
fn whole_float_drops_trailing_zero() {
    assert_eq!(show(&json!(2001.0)), "2001");
}

#[test]
fn fractional_float_is_shown() {
    assert_eq!(show(&json!(1.5)), "1.5");
}

#[test]
fn number_in_text_column_is_shown() {
    assert_eq!(show(&json!(42)), "42");
}

#[test]
fn true_is_shown() {
    assert_eq!(show(&json!(true)), "true");
}

#[test]
fn arrays_and_objects_are_not_falsy() {
    assert!(!json!([]).is_falsy());
    assert!(!json!({}).is_falsy());
    assert_eq!(show(&json!(["tech"])), r#"["tech"]"#);
}
