use crate::fixtures::{Boom, ErrorWithArgs};
use exhaust_rail::{AnyError, ArgValue, Error, ErrorKind, Outcome};
use serde_json::json;

#[test]
fn any_error_serializes_as_structured_record() {
    let mut err = ErrorWithArgs::new(1, 2.0).into_any();
    err.add_note("while loading");

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "ErrorWithArgs",
            "throws": "InvalidValue",
            "description": "1,2.0:",
            "arguments": { "a": { "Int": 1 }, "b": { "Float": 2.0 } },
            "notes": ["while loading"],
        })
    );
}

#[test]
fn thrown_payload_serializes_with_notes() {
    let mut err = Boom::new();
    err.add_notes(["a", "b"]);

    let value = serde_json::to_value(err.to_thrown()).unwrap();
    assert_eq!(value["kind"], "Runtime");
    assert_eq!(value["error"], "Boom");
    assert_eq!(value["message"], "boom");
    assert_eq!(value["notes"], json!(["a", "b"]));
}

#[test]
fn outcome_round_trips_through_json() {
    let ok: Outcome<Vec<u8>, AnyError> = Outcome::Ok(vec![1, 2]);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Ok":[1,2]}"#);

    let arg: ArgValue = serde_json::from_str(r#"{"Str":"key"}"#).unwrap();
    assert_eq!(arg, ArgValue::from("key"));
}
