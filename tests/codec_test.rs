use invoker::codec::{
    encode_editor_value, encode_payload, function_skeleton, generate_skeleton, safe_format_json,
    sanitize_input, CodecError,
};
use invoker::domain::{FunctionDescriptor, TypeDescriptor};
use serde_json::{json, Value};

fn typ(value: Value) -> TypeDescriptor {
    serde_json::from_value(value).unwrap()
}

fn function(value: Value) -> FunctionDescriptor {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_skeleton_for_numeric_tags() {
    for tag in ["F64", "F32", "U64", "S64", "U32", "S32", "U16", "S16", "U8", "S8"] {
        assert_eq!(generate_skeleton(&typ(json!({ "type": tag }))), json!(0), "{tag}");
    }
}

#[test]
fn test_skeleton_for_bool_list_option() {
    assert_eq!(generate_skeleton(&typ(json!({ "type": "Bool" }))), json!(false));
    assert_eq!(generate_skeleton(&typ(json!({ "type": "List" }))), json!([]));
    assert_eq!(generate_skeleton(&typ(json!({ "type": "Option" }))), Value::Null);
}

#[test]
fn test_skeleton_for_record_and_tuple() {
    let record = typ(json!({
        "type": "Record",
        "fields": [
            { "name": "a", "typ": { "type": "Str" } },
            { "name": "b", "typ": { "type": "U32" } }
        ]
    }));
    assert_eq!(generate_skeleton(&record), json!({ "a": "", "b": 0 }));

    let tuple = typ(json!({
        "type": "Tuple",
        "fields": [
            { "name": "0", "typ": { "type": "Str" } },
            { "name": "1", "typ": { "type": "Str" } }
        ]
    }));
    assert_eq!(generate_skeleton(&tuple), json!(["", ""]));
}

#[test]
fn test_skeleton_keeps_record_field_order() {
    let record = typ(json!({
        "type": "Record",
        "fields": [
            { "name": "zeta", "typ": { "type": "Str" } },
            { "name": "alpha", "typ": { "type": "Bool" } }
        ]
    }));
    assert_eq!(
        serde_json::to_string(&generate_skeleton(&record)).unwrap(),
        r#"{"zeta":"","alpha":false}"#
    );
}

#[test]
fn test_skeleton_round_trips_through_encoder() {
    let f = function(json!({
        "name": "update",
        "exportName": "api",
        "parameters": [
            { "name": "id", "typ": { "type": "Str" } },
            { "name": "count", "typ": { "type": "U32" } },
            { "name": "ratio", "typ": { "type": "F32" } },
            { "name": "items", "typ": { "type": "List", "inner": { "type": "Str" } } },
            { "name": "pair", "typ": { "type": "Tuple", "fields": [
                { "name": "0", "typ": { "type": "U8" } },
                { "name": "1", "typ": { "type": "Option" } }
            ] } },
            { "name": "user", "typ": { "type": "Record", "fields": [
                { "name": "name", "typ": { "type": "Str" } },
                { "name": "admin", "typ": { "type": "Bool" } }
            ] } }
        ],
        "results": []
    }));

    let args = function_skeleton(&f);
    let payload = encode_payload(&args, &f).unwrap();

    assert_eq!(payload.params.len(), f.parameters.len());
    for (encoded, param) in payload.params.iter().zip(&f.parameters) {
        assert_eq!(encoded.typ, param.typ);
    }
    assert_eq!(payload.params[3].value, json!([]));
    assert_eq!(payload.params[4].value, json!([0, null]));
}

#[test]
fn test_encode_list_wraps_scalar() {
    let f = function(json!({
        "name": "f",
        "parameters": [{ "name": "x", "typ": { "type": "List" } }]
    }));
    let payload = encode_payload(&[json!(5)], &f).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "params": [{ "value": [5], "typ": { "type": "List" } }] })
    );
}

#[test]
fn test_encode_list_passes_array() {
    let f = function(json!({
        "name": "f",
        "parameters": [{ "name": "x", "typ": { "type": "List" } }]
    }));
    let payload = encode_payload(&[json!([1, 2])], &f).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "params": [{ "value": [1, 2], "typ": { "type": "List" } }] })
    );
}

#[test]
fn test_encode_enum_is_unsupported() {
    let f = function(json!({
        "name": "f",
        "parameters": [{ "name": "x", "typ": { "type": "Enum", "cases": ["a", "b"] } }]
    }));
    assert_eq!(
        encode_payload(&[json!("a")], &f),
        Err(CodecError::UnsupportedType("Enum".to_string()))
    );
}

#[test]
fn test_encode_preserves_descriptor_members() {
    let descriptor = json!({
        "type": "List",
        "inner": { "type": "Record", "fields": [{ "name": "a", "typ": { "type": "Str" } }] }
    });
    let f = function(json!({
        "name": "f",
        "parameters": [{ "name": "xs", "typ": descriptor.clone() }]
    }));
    let payload = encode_editor_value(&json!([[{ "a": "x" }]]), &f).unwrap();
    let body = serde_json::to_value(&payload).unwrap();
    assert_eq!(body["params"][0]["typ"], descriptor);
    assert_eq!(body["params"][0]["value"], json!([{ "a": "x" }]));
}

#[test]
fn test_format_and_sanitize() {
    assert_eq!(safe_format_json(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
    assert_eq!(safe_format_json("not json"), "not json");
    assert_eq!(
        sanitize_input("\u{201C}hi\u{201D} and 'ok'"),
        "\"hi\" and \"ok\""
    );
}

#[test]
fn test_format_keeps_key_order() {
    assert_eq!(
        safe_format_json(r#"{"b":1,"a":2}"#),
        "{\n  \"b\": 1,\n  \"a\": 2\n}"
    );
}
